//! History command - inspect or reset recorded scores.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use posture_adapters::{history::DEFAULT_CAPACITY, JsonFileHistory};
use posture_core::{HistoryStore, HistorySummary, TimeFilter};
use serde::Serialize;
use time::OffsetDateTime;
use tracing::debug;

use super::score::resolve_history_path;
use crate::config::AppConfig;

/// Arguments for the history command
#[derive(Args)]
pub struct HistoryArgs {
    /// History file (overrides default and config)
    #[arg(long, value_name = "FILE", global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: HistoryCommand,
}

/// History subcommands
#[derive(Subcommand)]
pub enum HistoryCommand {
    /// Print summary statistics as JSON
    Stats {
        /// Only include records from this period
        #[arg(long, default_value = "all", value_parser = parse_filter)]
        since: TimeFilter,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Delete all recorded scores
    Clear,
    /// Print history file path
    Path,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsReport {
    since: String,
    summary: Option<HistorySummary>,
}

fn parse_filter(s: &str) -> Result<TimeFilter, String> {
    s.parse()
}

/// Run the history command.
pub fn run(args: &HistoryArgs, config: &AppConfig) -> Result<()> {
    let path = resolve_history_path(args.file.as_ref().or(config.history.path.as_ref()))?;

    match args.command {
        HistoryCommand::Stats { since, pretty } => {
            let history = open(path, config)?;
            print_stats(&history, since, pretty)
        }
        HistoryCommand::Clear => {
            let count = open(path.clone(), config)
                .and_then(|history| history.snapshots())
                .map(|records| records.len());
            let removed = JsonFileHistory::remove(&path)?;
            match count {
                Ok(count) => eprintln!("Cleared {count} record(s) from {}", path.display()),
                Err(e) if removed => {
                    debug!("Discarding unreadable history: {e:#}");
                    eprintln!("Removed unreadable history file {}", path.display());
                }
                Err(e) => return Err(e),
            }
            Ok(())
        }
        HistoryCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn open(path: PathBuf, config: &AppConfig) -> Result<JsonFileHistory> {
    let capacity = config.history.capacity.unwrap_or(DEFAULT_CAPACITY);
    JsonFileHistory::open(path, capacity)
}

fn print_stats(history: &dyn HistoryStore, since: TimeFilter, pretty: bool) -> Result<()> {
    let records = since.apply(&history.snapshots()?, OffsetDateTime::now_utc());
    let report = StatsReport {
        since: since.to_string(),
        summary: HistorySummary::from_snapshots(&records),
    };

    let json = if pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("Failed to serialize history summary")?;

    println!("{json}");
    Ok(())
}
