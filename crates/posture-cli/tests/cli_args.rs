//! CLI argument validation tests.
//!
//! Tests command-line argument parsing, validation, and error handling.

#![allow(clippy::unwrap_used)]
#![allow(deprecated)] // cargo_bin deprecation

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use posture_test_support::SyntheticFrameBuilder;
use tempfile::TempDir;

/// Temp workspace with one neutral frame at `neutral.json`.
fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("neutral.json"),
        SyntheticFrameBuilder::neutral().to_json(),
    )
    .unwrap();
    dir
}

/// Binary isolated from user config and data directories.
fn posture(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("posture").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg-config"))
        .env("XDG_DATA_HOME", dir.join("xdg-data"));
    cmd
}

// === Missing/Invalid Path Tests ===

#[test]
fn test_missing_path_shows_error() {
    let dir = workspace();
    posture(dir.path()).assert().code(2).stderr(
        predicate::str::contains("No paths specified")
            .or(predicate::str::contains("required"))
            .or(predicate::str::contains("PATHS")),
    );
}

#[test]
fn test_nonexistent_path_warns_but_continues() {
    let dir = workspace();
    posture(dir.path())
        .arg("missing/frames.jsonl")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_empty_directory() {
    let dir = workspace();
    let empty = dir.path().join("empty");
    fs::create_dir(&empty).unwrap();

    posture(dir.path())
        .arg(&empty)
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

// === Format Validation Tests ===

#[test]
fn test_invalid_format_rejected() {
    let dir = workspace();
    posture(dir.path())
        .args(["--format", "xml", "neutral.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_valid_formats_accepted() {
    let dir = workspace();
    for format in ["json", "jsonl"] {
        posture(dir.path())
            .args(["--format", format, "neutral.json"])
            .assert()
            .code(0);
    }
}

// === Threshold Validation Tests ===

#[test]
fn test_alert_threshold_above_hundred_rejected() {
    let dir = workspace();
    posture(dir.path())
        .args(["--alert-threshold", "150", "neutral.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("150 is not in 0..=100"));
}

#[test]
fn test_alert_threshold_non_numeric_rejected() {
    let dir = workspace();
    posture(dir.path())
        .args(["--alert-threshold", "high", "neutral.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid score"));
}

#[test]
fn test_valid_threshold_boundaries() {
    let dir = workspace();
    for value in ["0", "100"] {
        posture(dir.path())
            .args(["--alert-threshold", value, "neutral.json"])
            .assert()
            .code(0);
    }
}

// === Verbosity Level Tests ===

#[test]
fn test_verbosity_levels() {
    let dir = workspace();
    for flag in ["-v", "-vv", "-vvv"] {
        posture(dir.path())
            .args([flag, "neutral.json"])
            .assert()
            .code(0);
    }
}

#[test]
fn test_debug_verbosity_logs_scores() {
    let dir = workspace();
    posture(dir.path())
        .args(["-vv", "neutral.json"])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("score 100"));
}

#[test]
fn test_quiet_suppresses_progress() {
    let dir = workspace();
    fs::write(
        dir.path().join("slouched.json"),
        SyntheticFrameBuilder::slouched().to_json(),
    )
    .unwrap();

    posture(dir.path())
        .args(["--quiet", "slouched.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("issue(s)").not());
}

// === Help and Version ===

#[test]
fn test_help_flag() {
    let dir = workspace();
    posture(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--alert-threshold"))
        .stdout(predicate::str::contains("history"));
}

#[test]
fn test_version_flag() {
    let dir = workspace();
    posture(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("posture"));
}

// === Subcommands ===

#[test]
fn test_score_subcommand() {
    let dir = workspace();
    posture(dir.path())
        .args(["score", "--format", "json", "neutral.json"])
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_history_since_rejects_unknown_period() {
    let dir = workspace();
    posture(dir.path())
        .args(["history", "stats", "--since", "year"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not one of"));
}

#[test]
fn test_history_path_uses_data_dir() {
    let dir = workspace();
    posture(dir.path())
        .args(["history", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("xdg-data"))
        .stdout(predicate::str::contains("history.json"));
}
