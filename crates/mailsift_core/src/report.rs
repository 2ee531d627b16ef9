use serde::Serialize;

use crate::extract::extract_emails;

pub const DEFAULT_MAX_PARALLEL: usize = 5;

/// Parameters for a single harvest run. Nothing outlives the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestRequest {
    pub urls: Vec<String>,
    pub max_parallel: usize,
}

impl HarvestRequest {
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            max_parallel: DEFAULT_MAX_PARALLEL,
        }
    }

    pub fn with_max_parallel(mut self, max_parallel: usize) -> Self {
        self.max_parallel = max_parallel;
        self
    }

    /// Concurrency limit actually applied; zero is treated as one.
    pub fn effective_parallelism(&self) -> usize {
        self.max_parallel.max(1)
    }
}

/// One email found on one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarvestRow {
    pub url: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchWarning {
    pub url: String,
    pub message: String,
}

/// Outcome of fetching one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageFetch {
    Page(String),
    /// The request succeeded but there was no text to scan.
    Empty,
    Failed(FetchWarning),
}

impl PageFetch {
    /// `Page("")` collapses to `Empty`.
    pub fn from_text(text: String) -> Self {
        if text.is_empty() {
            PageFetch::Empty
        } else {
            PageFetch::Page(text)
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            PageFetch::Page(text) => Some(text),
            PageFetch::Empty | PageFetch::Failed(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HarvestReport {
    pub rows: Vec<HarvestRow>,
    pub warnings: Vec<FetchWarning>,
    pub pages_fetched: usize,
}

/// Extraction stage: pairs each URL with its fetch outcome, in input order.
///
/// Emails are deduplicated per page only; the same address on two pages
/// produces two rows.
pub fn rows_from_pages<U>(urls: &[U], pages: Vec<PageFetch>) -> HarvestReport
where
    U: AsRef<str>,
{
    let mut report = HarvestReport::default();
    for (url, page) in urls.iter().zip(pages) {
        match page {
            PageFetch::Page(text) => {
                report.pages_fetched += 1;
                report
                    .rows
                    .extend(extract_emails(&text).into_iter().map(|email| HarvestRow {
                        url: url.as_ref().to_string(),
                        email,
                    }));
            }
            PageFetch::Empty => report.pages_fetched += 1,
            PageFetch::Failed(warning) => report.warnings.push(warning),
        }
    }
    report
}
