use std::io::{self, Write};

use chrono::Utc;
use mailsift_core::{FetchWarning, HarvestReport, HarvestRow};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    harvested_utc: String,
    pages_fetched: usize,
    rows: &'a [HarvestRow],
    warnings: &'a [FetchWarning],
}

pub fn write_report<W: Write>(
    out: &mut W,
    report: &HarvestReport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => write_table(out, &report.rows),
        OutputFormat::Json => {
            let json = JsonReport {
                harvested_utc: Utc::now().to_rfc3339(),
                pages_fetched: report.pages_fetched,
                rows: &report.rows,
                warnings: &report.warnings,
            };
            serde_json::to_writer_pretty(&mut *out, &json)?;
            writeln!(out)
        }
    }
}

fn write_table<W: Write>(out: &mut W, rows: &[HarvestRow]) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "No email addresses found.");
    }
    let width = rows
        .iter()
        .map(|row| row.url.chars().count())
        .chain(std::iter::once("WEBSITE".len()))
        .max()
        .unwrap_or(0);
    writeln!(out, "{:<width$}  EMAIL", "WEBSITE")?;
    for row in rows {
        writeln!(out, "{:<width$}  {}", row.url, row.email)?;
    }
    Ok(())
}
