//! Mailsift engine: page fetching and the concurrent harvest pipeline.
mod decode;
mod engine;
mod fetch;
mod harvest;
mod types;

pub use decode::{decode_page, DecodedPage};
pub use engine::{EngineError, EngineHandle};
pub use fetch::{fetch_page, FetchSettings, Fetcher, ReqwestFetcher, BROWSER_USER_AGENT};
pub use harvest::{harvest, harvest_with_progress, ChannelProgressSink, NullProgressSink, ProgressSink};
pub use types::{
    FailureKind, FetchError, FetchMetadata, FetchOutput, FetchStatus, HarvestEvent, RequestId,
};

pub use mailsift_core::{HarvestReport, HarvestRequest, HarvestRow, PageFetch};
