//! CLI for the juyo dataset fetcher.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use juyo_core::config::{self, JuyoConfig, MemberFailurePolicy};
use std::path::PathBuf;

use commands::{run_areas, run_daily, run_fetch};

/// Top-level CLI for juyo.
#[derive(Debug, Parser)]
#[command(name = "juyo")]
#[command(about = "Fetch and normalize regional electricity demand datasets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Overrides shared by the fetching subcommands.
#[derive(Debug, Args, Default)]
pub struct OutputArgs {
    /// Output root (default from config, usually `csv`).
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Keep processing an archive's other members when one fails.
    #[arg(long)]
    pub skip_failed_members: bool,
}

impl OutputArgs {
    pub fn apply(&self, cfg: &mut JuyoConfig) {
        if let Some(out) = &self.out {
            cfg.output_root = out.clone();
        }
        if self.skip_failed_members {
            cfg.member_failure = MemberFailurePolicy::Skip;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch one area's dataset for a date.
    Fetch {
        /// Area key, e.g. `tokyo`.
        #[arg(long)]
        area: String,

        /// Date as YYYY-MM-DD or YYYYMMDD.
        #[arg(long)]
        date: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Fetch yesterday's datasets for every supported area (or the given ones).
    Daily {
        /// Restrict to these areas; repeatable.
        #[arg(long = "area", value_name = "AREA")]
        areas: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List supported areas.
    Areas,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { area, date, output } => {
                output.apply(&mut cfg);
                run_fetch(&cfg, &area, &date)?;
            }
            CliCommand::Daily { areas, output } => {
                output.apply(&mut cfg);
                run_daily(&cfg, &areas)?;
            }
            CliCommand::Areas => run_areas(),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
