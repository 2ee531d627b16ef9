//! Mailsift core: pure URL screening, email extraction and result assembly.
mod extract;
mod report;
mod url_filter;

pub use extract::{extract, extract_emails};
pub use report::{
    rows_from_pages, FetchWarning, HarvestReport, HarvestRequest, HarvestRow, PageFetch,
    DEFAULT_MAX_PARALLEL,
};
pub use url_filter::{is_valid, parse_candidate_lines, screen_candidates, UrlFilter, DENIED_DOMAINS};
