use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use mailsift_core::HarvestRequest;
use mailsift_logging::sift_debug;

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::harvest::{harvest_with_progress, ChannelProgressSink, ProgressSink};
use crate::{FetchError, HarvestEvent, RequestId};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("could not start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("could not build http client: {0}")]
    Client(#[from] FetchError),
}

enum EngineCommand {
    Harvest {
        request_id: RequestId,
        request: HarvestRequest,
    },
}

/// Runs harvests on a background thread and reports back through events.
///
/// Each submitted request ends with exactly one [`HarvestEvent::Completed`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<HarvestEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let fetcher = ReqwestFetcher::new(settings)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
            sift_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, request_id: RequestId, request: HarvestRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Harvest {
            request_id,
            request,
        });
    }

    /// Blocks until the next event; `None` once the engine thread is gone.
    pub fn recv(&self) -> Option<HarvestEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<HarvestEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<HarvestEvent>,
) {
    match command {
        EngineCommand::Harvest {
            request_id,
            request,
        } => {
            let sink = ChannelProgressSink::new(event_tx);
            let report = harvest_with_progress(fetcher, request_id, &request, &sink).await;
            sink.emit(HarvestEvent::Completed { request_id, report });
        }
    }
}
