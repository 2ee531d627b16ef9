use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use mailsift_logging::LogDestination;

#[derive(Parser, Debug)]
#[command(
    name = "mailsift",
    version,
    about = "Collect contact email addresses published on business websites"
)]
pub struct Cli {
    #[arg(help = "Candidate website URLs")]
    pub urls: Vec<String>,
    #[arg(
        long,
        short,
        value_name = "PATH",
        help = "Read candidate URLs from a file, one per line (`-` for stdin)"
    )]
    pub input: Option<PathBuf>,
    #[arg(long, value_name = "PATH", help = "RON configuration file")]
    pub config: Option<PathBuf>,
    #[arg(long, value_name = "N", help = "Maximum simultaneous page fetches")]
    pub max_parallel: Option<usize>,
    #[arg(long, value_name = "SECS", help = "Per-request timeout in seconds")]
    pub timeout_secs: Option<u64>,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, value_enum, default_value_t = LogTarget::Terminal)]
    pub log: LogTarget,
    #[arg(long, short, help = "Log fetch details")]
    pub verbose: bool,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }
}
