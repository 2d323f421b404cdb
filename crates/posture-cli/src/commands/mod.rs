//! CLI command definitions and handlers.

pub mod history;
pub mod score;

use clap::{Parser, Subcommand};

/// Posture - score sitting posture from pose landmarks
#[derive(Parser)]
#[command(name = "posture")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shared score arguments (paths, thresholds, flags).
    #[command(flatten)]
    pub score: score::ScoreArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Score landmark recordings
    Score(score::ScoreArgs),
    /// Inspect or reset the recorded score history
    History(history::HistoryArgs),
}

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every frame scored without issues.
    Success = 0,
    /// At least one frame had an issue.
    IssuesFound = 1,
    /// The command failed.
    Error = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}
