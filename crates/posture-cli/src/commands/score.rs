//! Score command - score landmark recordings for posture issues.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use posture_adapters::{history::DEFAULT_CAPACITY, FsLandmarkSource, JsonFileHistory};
use posture_core::{
    AlertPolicy, LandmarkSource, PostureScorer, ScorerConfig, Session, SessionReport,
};
use tracing::{debug, info};

use super::ExitCode;
use crate::config::{default_history_path, AppConfig};
use crate::output::{JsonOutput, ProgressBar, StderrNotifier};

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON Lines (one JSON object per line)
    #[default]
    Jsonl,
    /// Single JSON array
    Json,
}

/// Parse and validate a score threshold (0-100).
fn parse_threshold(s: &str) -> Result<u8, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid score"))?;
    if value <= 100 {
        Ok(value)
    } else {
        Err(format!("{value} is not in 0..=100"))
    }
}

/// Shared arguments for posture scoring.
#[derive(Args, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScoreArgs {
    /// Landmark files (.json, .jsonl) or directories to score
    pub paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Alert when a score drops below this value (0-100)
    #[arg(long, value_parser = parse_threshold)]
    pub alert_threshold: Option<u8>,

    /// Disable low-score alerts
    #[arg(long)]
    pub no_alert: bool,

    /// Append every scored frame to the history file
    #[arg(long)]
    pub record: bool,

    /// History file (overrides default and config)
    #[arg(long, value_name = "FILE")]
    pub history: Option<PathBuf>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,

    /// Add one-decimal display metrics to each record
    #[arg(long)]
    pub display: bool,

    /// Merged config (populated by `with_config`, not from CLI).
    #[arg(skip)]
    config: Option<AppConfig>,
}

impl ScoreArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults (in accessor methods)
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    ///
    /// CLI `--no-alert` always wins over `alert.enabled`.
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        if !args.recursive {
            args.recursive = config.general.recursive.unwrap_or(false);
        }

        if !args.no_alert {
            if let Some(enabled) = config.alert.enabled {
                args.no_alert = !enabled;
            }
        }
        args.alert_threshold = args.alert_threshold.or(config.alert.threshold);

        if !args.record {
            args.record = config.history.record.unwrap_or(false);
        }
        if args.history.is_none() {
            args.history.clone_from(&config.history.path);
        }

        if args.format.is_none() {
            args.format = config
                .output
                .format
                .as_ref()
                .and_then(|s| match s.as_str() {
                    "json" => Some(OutputFormat::Json),
                    "jsonl" => Some(OutputFormat::Jsonl),
                    _ => None,
                });
        }

        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }
        if !args.display {
            args.display = config.output.display.unwrap_or(false);
        }
        if !args.progress {
            args.progress = config.output.progress.unwrap_or(false);
        }

        // Kept for scorer and history settings that have no CLI flag
        args.config = Some(config.clone());

        args
    }

    /// Get alert threshold with fallback to the policy default.
    fn alert_threshold(&self) -> u8 {
        self.alert_threshold
            .unwrap_or(AlertPolicy::DEFAULT_THRESHOLD)
    }

    /// Get output format with fallback to JSONL.
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    fn history_capacity(&self) -> usize {
        self.config
            .as_ref()
            .and_then(|c| c.history.capacity)
            .unwrap_or(DEFAULT_CAPACITY)
    }

    fn scorer_config(&self) -> ScorerConfig {
        let defaults = ScorerConfig::default();
        let Some(scoring) = self.config.as_ref().map(|c| &c.scoring) else {
            return defaults;
        };
        ScorerConfig {
            frame_width: scoring.frame_width.unwrap_or(defaults.frame_width),
            frame_height: scoring.frame_height.unwrap_or(defaults.frame_height),
            winging_threshold: scoring
                .winging_threshold
                .unwrap_or(defaults.winging_threshold),
        }
    }
}

/// Result of running the score command.
pub struct ScoreResult {
    /// Session counters.
    pub report: SessionReport,
    /// Exit code.
    pub exit_code: ExitCode,
}

impl From<SessionReport> for ScoreResult {
    fn from(report: SessionReport) -> Self {
        let exit_code = if report.with_issues > 0 {
            ExitCode::IssuesFound
        } else {
            ExitCode::Success
        };
        Self { report, exit_code }
    }
}

/// Run the score command.
///
/// Expects `args` to have been processed through `with_config()` first
/// to apply configuration file settings.
pub fn run(args: &ScoreArgs) -> Result<ScoreResult> {
    info!("Running score command on {} paths", args.paths.len());

    if args.paths.is_empty() {
        anyhow::bail!("No paths specified");
    }

    let source = FsLandmarkSource::new(args.paths.clone(), args.recursive);
    let total = source.count_hint();

    let show_progress = !args.quiet && (args.progress || std::io::stderr().is_terminal());
    let progress_bar = ProgressBar::new(total.map(|t| t as u64), args.quiet, show_progress);

    let output = JsonOutput::stdout(args.format() == OutputFormat::Json, args.pretty)
        .with_display(args.display);

    let scorer = PostureScorer::new(args.scorer_config());
    debug!("Scorer config: {:?}", scorer.config());

    let history = if args.record {
        let path = resolve_history_path(args.history.as_ref())?;
        debug!("Recording history to {}", path.display());
        Some(JsonFileHistory::open(path, args.history_capacity())?)
    } else {
        None
    };

    let notifier = StderrNotifier::new();

    let mut session = Session::new(&scorer, &output).with_progress(&progress_bar);
    if let Some(history) = history.as_ref() {
        session = session.with_history(history);
    }
    if !args.no_alert {
        session = session.with_notifier(&notifier, AlertPolicy::new(args.alert_threshold()));
    }

    Ok(session.run(&source)?.into())
}

/// Resolve the history file: explicit path, then the user data directory.
pub fn resolve_history_path(explicit: Option<&PathBuf>) -> Result<PathBuf> {
    explicit
        .cloned()
        .or_else(default_history_path)
        .context("No history path given and no user data directory available")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold("0"), Ok(0));
        assert_eq!(parse_threshold("100"), Ok(100));
        assert!(parse_threshold("101").unwrap_err().contains("0..=100"));
        assert!(parse_threshold("-1").is_err());
        assert!(parse_threshold("abc").unwrap_err().contains("not a valid score"));
    }

    #[test]
    fn test_cli_flags_override_config() {
        let config: AppConfig = toml::from_str(
            r"
[alert]
enabled = true
threshold = 70

[output]
format = 'json'
",
        )
        .unwrap();
        let cli = ScoreArgs {
            alert_threshold: Some(30),
            no_alert: true,
            format: Some(OutputFormat::Jsonl),
            ..ScoreArgs::default()
        };

        let merged = ScoreArgs::with_config(cli, &config);

        assert_eq!(merged.alert_threshold(), 30);
        assert!(merged.no_alert);
        assert_eq!(merged.format(), OutputFormat::Jsonl);
    }

    #[test]
    fn test_config_fills_unset_flags() {
        let config: AppConfig = toml::from_str(
            r"
[general]
recursive = true

[alert]
enabled = false
threshold = 70

[history]
record = true
path = 'h.json'
capacity = 5

[output]
display = true

[scoring]
frame_width = 1920.0
",
        )
        .unwrap();

        let merged = ScoreArgs::with_config(ScoreArgs::default(), &config);

        assert!(merged.recursive);
        assert!(merged.no_alert);
        assert_eq!(merged.alert_threshold(), 70);
        assert!(merged.record);
        assert_eq!(merged.history, Some(PathBuf::from("h.json")));
        assert_eq!(merged.history_capacity(), 5);
        assert!(merged.display);
        assert!((merged.scorer_config().frame_width - 1920.0).abs() < f64::EPSILON);
        assert!((merged.scorer_config().frame_height - 480.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_defaults_without_config() {
        let args = ScoreArgs::default();
        assert_eq!(args.alert_threshold(), AlertPolicy::DEFAULT_THRESHOLD);
        assert_eq!(args.format(), OutputFormat::Jsonl);
        assert_eq!(args.history_capacity(), DEFAULT_CAPACITY);
        assert_eq!(args.scorer_config(), ScorerConfig::default());
    }

    #[test]
    fn test_exit_code_from_report() {
        let clean = SessionReport {
            processed: 3,
            skipped: 1,
            ..SessionReport::default()
        };
        assert_eq!(ScoreResult::from(clean).exit_code, ExitCode::Success);

        let flagged = SessionReport {
            processed: 3,
            with_issues: 1,
            ..SessionReport::default()
        };
        let result = ScoreResult::from(flagged);
        assert_eq!(result.exit_code, ExitCode::IssuesFound);
        assert_eq!(result.report, flagged);
    }

    #[test]
    fn test_explicit_history_path_wins() {
        let path = PathBuf::from("custom.json");
        assert_eq!(resolve_history_path(Some(&path)).unwrap(), path);
    }
}
