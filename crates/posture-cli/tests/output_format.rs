//! Output format validation tests.
//!
//! Tests JSON/JSONL output format correctness and required field presence.

#![allow(clippy::unwrap_used)]
#![allow(deprecated)] // cargo_bin deprecation

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use posture_test_support::SyntheticFrameBuilder;
use serde_json::Value;
use tempfile::TempDir;

const METRIC_FIELDS: &[&str] = &[
    "neckAngle",
    "shoulderSlope",
    "headForward",
    "shoulderHeightDiff",
    "cervicalLordosis",
    "forwardHeadDistance",
    "headTilt",
    "headRotation",
    "leftShoulderHeightDiff",
    "leftScapularWinging",
    "rightScapularWinging",
    "shoulderForwardMovement",
];

fn recording() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let lines = [
        SyntheticFrameBuilder::neutral().to_json(),
        SyntheticFrameBuilder::slouched().to_json(),
    ];
    fs::write(dir.path().join("frames.jsonl"), lines.join("\n")).unwrap();
    dir
}

fn posture(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("posture").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg-config"))
        .env("XDG_DATA_HOME", dir.join("xdg-data"));
    cmd
}

// === JSONL Format Tests ===

#[test]
fn test_jsonl_format_single_object_per_line() {
    let dir = recording();
    let output = posture(dir.path())
        .args(["--format", "jsonl", "frames.jsonl"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let lines: Vec<Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(Value::is_object));
}

#[test]
fn test_jsonl_is_default() {
    let dir = recording();
    let output = posture(dir.path()).arg("frames.jsonl").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with('{'));
}

#[test]
fn test_required_fields_present() {
    let dir = recording();
    let output = posture(dir.path()).arg("frames.jsonl").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first: Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();

    for field in ["source", "timestamp", "metrics", "score", "statusLabel", "issues"] {
        assert!(first.get(field).is_some(), "missing field {field}");
    }
    for field in METRIC_FIELDS {
        assert!(first["metrics"].get(field).is_some(), "missing metric {field}");
    }
    assert!(first["metrics"]["leftScapularWinging"].is_boolean());
}

#[test]
fn test_timestamp_is_rfc3339() {
    let dir = recording();
    let output = posture(dir.path()).arg("frames.jsonl").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first: Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();

    let timestamp = first["timestamp"].as_str().unwrap();
    assert!(time::OffsetDateTime::parse(
        timestamp,
        &time::format_description::well_known::Rfc3339
    )
    .is_ok());
}

#[test]
fn test_issue_shape() {
    let dir = recording();
    let output = posture(dir.path()).arg("frames.jsonl").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let second: Value = serde_json::from_str(stdout.lines().nth(1).unwrap()).unwrap();

    let issues = second["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 3);
    for issue in issues {
        assert!(issue["check"].is_string());
        assert!(issue["severity"].is_string());
        assert!(issue["deduction"].is_u64());
        assert!(!issue["problem"].as_str().unwrap().is_empty());
        assert!(!issue["solution"].as_str().unwrap().is_empty());
    }
}

#[test]
fn test_display_flag_adds_rounded_metrics() {
    let dir = recording();
    let output = posture(dir.path())
        .args(["--display", "frames.jsonl"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first: Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();

    let display = &first["display"];
    assert!((display["neckAngle"].as_f64().unwrap() + 21.8).abs() < 1e-9);
    assert!((display["headForwardPct"].as_f64().unwrap() - 5.0).abs() < 1e-9);
    assert!(display["shoulderHeightDiffPct"].is_number());
    assert!(first["metrics"].is_object());
}

#[test]
fn test_display_absent_without_flag() {
    let dir = recording();
    let output = posture(dir.path()).arg("frames.jsonl").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first: Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert!(first.get("display").is_none());
}

// === JSON Format Tests ===

#[test]
fn test_json_format_is_array() {
    let dir = recording();
    let output = posture(dir.path())
        .args(["--format", "json", "frames.jsonl"])
        .output()
        .unwrap();

    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["score"], 100);
    assert_eq!(array[1]["score"], 63);
}

#[test]
fn test_json_pretty_output() {
    let dir = recording();
    let output = posture(dir.path())
        .args(["--format", "json", "--pretty", "frames.jsonl"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.starts_with("[\n"));
    assert!(stdout.contains("\n  {"));
    assert!(serde_json::from_str::<Value>(&stdout).is_ok());
}

#[test]
fn test_pretty_ignored_for_jsonl() {
    let dir = recording();
    let output = posture(dir.path())
        .args(["--pretty", "frames.jsonl"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_json_empty_input_is_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let output = posture(dir.path())
        .args(["--format", "json", "."])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[]");
}
