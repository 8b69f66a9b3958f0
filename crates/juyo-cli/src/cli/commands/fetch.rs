//! `juyo fetch --area <area> --date <date>` – fetch one dataset.

use anyhow::{Context, Result};
use juyo_core::config::JuyoConfig;
use juyo_core::{Area, FetchReport, Pipeline, RequestDate};

pub fn run_fetch(cfg: &JuyoConfig, area: &str, date: &str) -> Result<()> {
    let area: Area = area.parse()?;
    let date = RequestDate::parse(date)?;
    let pipeline = Pipeline::from_config(cfg);
    let report = pipeline
        .run(&date, area)
        .with_context(|| format!("fetch {area} for {date}"))?;
    print_report(&report);
    Ok(())
}

/// Prints written paths, one per line, then any skipped members to stderr.
pub(super) fn print_report(report: &FetchReport) {
    for path in &report.written {
        println!("{}", path.display());
    }
    for skipped in &report.skipped {
        eprintln!(
            "skipped {} member #{} ({}): {}",
            report.area,
            skipped.index,
            skipped.name.as_deref().unwrap_or("?"),
            skipped.error
        );
    }
}
