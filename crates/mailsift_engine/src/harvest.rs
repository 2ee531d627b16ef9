use std::sync::mpsc;

use futures_util::stream::{self, StreamExt};
use mailsift_core::{rows_from_pages, HarvestReport, HarvestRequest, PageFetch};
use mailsift_logging::sift_info;

use crate::fetch::{fetch_page, Fetcher};
use crate::{FetchStatus, HarvestEvent, RequestId};

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: HarvestEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn emit(&self, _event: HarvestEvent) {}
}

pub struct ChannelProgressSink {
    tx: mpsc::Sender<HarvestEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: mpsc::Sender<HarvestEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: HarvestEvent) {
        let _ = self.tx.send(event);
    }
}

/// Fetches every URL in `request` and collects the emails found, without progress events.
pub async fn harvest(fetcher: &dyn Fetcher, request: &HarvestRequest) -> HarvestReport {
    harvest_with_progress(fetcher, 0, request, &NullProgressSink).await
}

/// Runs one harvest with at most `request.max_parallel` fetches in flight.
///
/// A free slot picks up the next queued URL as soon as any fetch finishes, so a
/// slow site only ties up its own slot. All fetches are joined before
/// extraction starts, and rows come back grouped by input URL order. URLs are not
/// re-validated here; screen them first.
pub async fn harvest_with_progress(
    fetcher: &dyn Fetcher,
    request_id: RequestId,
    request: &HarvestRequest,
    sink: &dyn ProgressSink,
) -> HarvestReport {
    if request.urls.is_empty() {
        return HarvestReport::default();
    }

    let limit = request.effective_parallelism();
    sift_info!(
        "Harvest request_id={} urls={} max_parallel={}",
        request_id,
        request.urls.len(),
        limit
    );

    let mut fetched: Vec<(usize, PageFetch)> =
        stream::iter(request.urls.iter().cloned().enumerate())
            .map(|(index, url)| async move {
                sink.emit(HarvestEvent::FetchStarted {
                    request_id,
                    index,
                    url: url.clone(),
                });
                let page = fetch_page(fetcher, &url).await;
                sink.emit(HarvestEvent::FetchFinished {
                    request_id,
                    index,
                    url,
                    status: status_of(&page),
                });
                (index, page)
            })
            .buffer_unordered(limit)
            .collect()
            .await;
    fetched.sort_unstable_by_key(|(index, _)| *index);
    let pages: Vec<PageFetch> = fetched.into_iter().map(|(_, page)| page).collect();

    let report = rows_from_pages(&request.urls, pages);
    sift_info!(
        "Harvest request_id={} done: rows={} pages={} warnings={}",
        request_id,
        report.rows.len(),
        report.pages_fetched,
        report.warnings.len()
    );
    report
}

fn status_of(page: &PageFetch) -> FetchStatus {
    match page {
        PageFetch::Page(text) => FetchStatus::Text {
            chars: text.chars().count(),
        },
        PageFetch::Empty => FetchStatus::Empty,
        PageFetch::Failed(warning) => FetchStatus::Failed {
            message: warning.message.clone(),
        },
    }
}
