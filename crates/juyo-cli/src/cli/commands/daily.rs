//! `juyo daily` – fetch yesterday's data for each area, stopping at the first error.

use anyhow::{Context, Result};
use chrono::Local;
use juyo_core::config::JuyoConfig;
use juyo_core::{Area, Pipeline, RequestDate};

use super::fetch::print_report;

pub fn run_daily(cfg: &JuyoConfig, areas: &[String]) -> Result<()> {
    let areas = select_areas(areas)?;
    let yesterday = Local::now()
        .date_naive()
        .pred_opt()
        .context("no previous day")?;
    let date = RequestDate::new(yesterday);

    let pipeline = Pipeline::from_config(cfg);
    for area in areas {
        let report = pipeline
            .run(&date, area)
            .with_context(|| format!("fetch {area} for {date}"))?;
        print_report(&report);
    }
    tracing::info!("daily run for {} completed", date);
    Ok(())
}

/// Parses `--area` values; none means every supported area.
fn select_areas(keys: &[String]) -> Result<Vec<Area>> {
    if keys.is_empty() {
        return Ok(Area::ALL.to_vec());
    }
    keys.iter()
        .map(|k| k.parse::<Area>().map_err(anyhow::Error::from))
        .collect()
}
