//! Posture CLI - ergonomic posture scoring for recorded pose landmarks.

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::score::ScoreArgs;
use commands::{Cli, Commands, ExitCode};
use config::AppConfig;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = AppConfig::load();

    let exit_code = match cli.command {
        Some(Commands::Score(args)) => score(args, &config),
        Some(Commands::History(ref args)) => match commands::history::run(args, &config) {
            Ok(()) => ExitCode::Success,
            Err(e) => {
                eprintln!("error: {e:#}");
                ExitCode::Error
            }
        },
        None => {
            // Default behavior: score with flattened args
            if cli.score.paths.is_empty() {
                eprintln!("error: No paths specified. Use --help for usage information.");
                return ExitCode::Error.into();
            }
            score(cli.score, &config)
        }
    };

    exit_code.into()
}

fn score(args: ScoreArgs, config: &AppConfig) -> ExitCode {
    let args = ScoreArgs::with_config(args, config);
    match commands::score::run(&args) {
        Ok(result) => {
            let report = result.report;
            info!(
                "Scored {} frame(s), skipped {}, {} with issues, {} alert(s)",
                report.processed, report.skipped, report.with_issues, report.alerts
            );
            result.exit_code
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::Error
        }
    }
}
