use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use mailsift_core::{UrlFilter, DEFAULT_MAX_PARALLEL};
use mailsift_engine::{FetchSettings, BROWSER_USER_AGENT};
use mailsift_logging::sift_info;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings read from an optional RON file; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub max_parallel: usize,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub extra_denied_domains: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            max_parallel: DEFAULT_MAX_PARALLEL,
            timeout_secs: fetch.request_timeout.as_secs(),
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            redirect_limit: fetch.redirect_limit,
            max_bytes: fetch.max_bytes,
            extra_denied_domains: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        sift_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Command-line values win over the file.
    pub fn apply_overrides(&mut self, max_parallel: Option<usize>, timeout_secs: Option<u64>) {
        if let Some(max_parallel) = max_parallel {
            self.max_parallel = max_parallel;
        }
        if let Some(timeout_secs) = timeout_secs {
            self.timeout_secs = timeout_secs;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_parallel == 0 {
            return Err(ConfigError::Invalid("max_parallel must be at least 1".into()));
        }
        if self.timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeouts must be at least 1 second".into()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid("user_agent must not be empty".into()));
        }
        Ok(())
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
            redirect_limit: self.redirect_limit,
            max_bytes: self.max_bytes,
        }
    }

    pub fn url_filter(&self) -> UrlFilter {
        UrlFilter::with_extra_domains(&self.extra_denied_domains)
    }
}
