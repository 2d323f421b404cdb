//! Configuration file support for posture.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/posture/config.toml` (lowest priority)
//! - Project-local: `.posture.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// Project-local config file name.
const PROJECT_FILE: &str = ".posture.toml";

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General options.
    pub general: GeneralConfig,
    /// Metric computation settings.
    pub scoring: ScoringConfig,
    /// Low-score alert settings.
    pub alert: AlertConfig,
    /// Score history settings.
    pub history: HistoryConfig,
    /// Output formatting settings.
    pub output: OutputConfig,
}

/// General configuration options.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Recurse into subdirectories by default.
    pub recursive: Option<bool>,
}

/// Metric computation configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Frame width used to scale horizontal distances.
    pub frame_width: Option<f64>,
    /// Frame height used to scale vertical distances.
    pub frame_height: Option<f64>,
    /// Normalized shoulder-to-elbow offset that counts as winging.
    pub winging_threshold: Option<f64>,
}

/// Alert configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Enable/disable low-score alerts.
    pub enabled: Option<bool>,
    /// Alert when a score drops below this value (0-100).
    pub threshold: Option<u8>,
}

/// History configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Record every scored frame.
    pub record: Option<bool>,
    /// History file path.
    pub path: Option<PathBuf>,
    /// Maximum number of records kept.
    pub capacity: Option<usize>,
}

/// Output formatting configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "json" or "jsonl".
    pub format: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
    /// Add rounded display metrics to each record.
    pub display: Option<bool>,
    /// Show progress bar.
    pub progress: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Priority (lowest to highest):
    /// 1. XDG config: `~/.config/posture/config.toml`
    /// 2. Project-local: `.posture.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored. Invalid values are reported as
    /// warnings and replaced by defaults.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        for e in config.validate() {
            eprintln!("warning: {e}; using default");
        }

        config
    }

    /// Validate configuration values are within acceptable ranges.
    ///
    /// Invalid values are reset to `None` so the hardcoded default applies.
    /// Returns one message per rejected value.
    fn validate(&mut self) -> Vec<String> {
        let mut errors = Vec::new();

        for (name, value) in [
            ("scoring.frame_width", &mut self.scoring.frame_width),
            ("scoring.frame_height", &mut self.scoring.frame_height),
        ] {
            if let Some(v) = *value {
                if !(v.is_finite() && v > 0.0) {
                    errors.push(format!("{name} must be a positive number, got {v}"));
                    *value = None;
                }
            }
        }
        if let Some(t) = self.scoring.winging_threshold {
            if !(0.0..=1.0).contains(&t) {
                errors.push(format!("scoring.winging_threshold must be 0.0-1.0, got {t}"));
                self.scoring.winging_threshold = None;
            }
        }

        if let Some(t) = self.alert.threshold {
            if t > 100 {
                errors.push(format!("alert.threshold must be 0-100, got {t}"));
                self.alert.threshold = None;
            }
        }

        if self.history.capacity == Some(0) {
            errors.push("history.capacity must be at least 1".to_string());
            self.history.capacity = None;
        }

        if let Some(ref f) = self.output.format {
            if f != "json" && f != "jsonl" {
                errors.push(format!("output.format must be 'json' or 'jsonl', got '{f}'"));
                self.output.format = None;
            }
        }

        errors
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        self.general.recursive = other.general.recursive.or(self.general.recursive);

        self.scoring.frame_width = other.scoring.frame_width.or(self.scoring.frame_width);
        self.scoring.frame_height = other.scoring.frame_height.or(self.scoring.frame_height);
        self.scoring.winging_threshold = other
            .scoring
            .winging_threshold
            .or(self.scoring.winging_threshold);

        self.alert.enabled = other.alert.enabled.or(self.alert.enabled);
        self.alert.threshold = other.alert.threshold.or(self.alert.threshold);

        self.history.record = other.history.record.or(self.history.record);
        self.history.path = other.history.path.or_else(|| self.history.path.take());
        self.history.capacity = other.history.capacity.or(self.history.capacity);

        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.pretty = other.output.pretty.or(self.output.pretty);
        self.output.display = other.output.display.or(self.output.display);
        self.output.progress = other.output.progress.or(self.output.progress);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("posture").join("config.toml"))
}

/// Default history file under the user data directory.
pub fn default_history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("posture").join("history.json"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.posture.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(PROJECT_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}
