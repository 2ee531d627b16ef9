mod cli;
mod config;
mod input;
mod output;

use std::io::{self, Write};

use anyhow::{bail, Context};
use clap::Parser;
use mailsift_core::{screen_candidates, HarvestReport, HarvestRequest};
use mailsift_engine::{EngineHandle, FetchStatus, HarvestEvent};
use mailsift_logging::{sift_debug, sift_info, sift_warn};

use cli::Cli;
use config::AppConfig;
use output::OutputFormat;

const REQUEST_ID: u64 = 1;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    mailsift_logging::initialize(cli.log.into(), cli.log_level());

    let mut config = match cli.config.as_deref() {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    config.apply_overrides(cli.max_parallel, cli.timeout_secs);
    config.validate()?;

    let candidates = input::collect_candidates(&cli.urls, cli.input.as_deref())?;
    let filter = config.url_filter();
    sift_debug!("Denied domains: {}", filter.denied_domains().join(", "));
    let urls = screen_candidates(&filter, &candidates);
    sift_info!(
        "Screened {} candidate(s), {} website(s) to scan",
        candidates.len(),
        urls.len()
    );

    let report = if urls.is_empty() {
        sift_warn!("No valid websites to scan");
        HarvestReport::default()
    } else {
        let engine =
            EngineHandle::new(config.fetch_settings()).context("failed to start engine")?;
        engine.submit(
            REQUEST_ID,
            HarvestRequest::new(urls).with_max_parallel(config.max_parallel),
        );
        wait_for_report(&engine)?
    };

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_report(&mut out, &report, format)?;
    out.flush()?;
    Ok(())
}

fn wait_for_report(engine: &EngineHandle) -> anyhow::Result<HarvestReport> {
    while let Some(event) = engine.recv() {
        match event {
            HarvestEvent::FetchStarted { index, url, .. } => {
                sift_debug!("[{}] fetching {}", index + 1, url);
            }
            HarvestEvent::FetchFinished {
                index, url, status, ..
            } => match status {
                FetchStatus::Text { chars } => {
                    sift_info!("[{}] {} ({} chars)", index + 1, url, chars)
                }
                FetchStatus::Empty => sift_info!("[{}] {} (empty page)", index + 1, url),
                FetchStatus::Failed { message } => {
                    sift_debug!("[{}] {} skipped: {}", index + 1, url, message)
                }
            },
            HarvestEvent::Completed { request_id, report } if request_id == REQUEST_ID => {
                return Ok(report);
            }
            HarvestEvent::Completed { .. } => {}
        }
    }
    bail!("engine stopped before the harvest completed")
}
