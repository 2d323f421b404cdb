//! Filesystem adapter for recorded landmark frames.
//!
//! Two layouts are read:
//! - `.jsonl`: one frame per line
//! - `.json`: one frame, or an array of frames
//!
//! A frame is either a bare array of 33 `{x, y}` points or an object
//! `{"timestamp": "<RFC 3339>", "landmarks": [...]}` with an optional timestamp.

use anyhow::{Context, Result};
use posture_core::{FrameInput, Landmark, LandmarkSource};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use tracing::{debug, warn};

/// Supported frame file extensions.
const FRAME_EXTENSIONS: &[&str] = &["json", "jsonl"];

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FrameRecord {
    Tagged {
        #[serde(default, with = "time::serde::rfc3339::option")]
        timestamp: Option<OffsetDateTime>,
        landmarks: Vec<Landmark>,
    },
    Bare(Vec<Landmark>),
}

impl FrameRecord {
    fn into_input(self, label: String) -> FrameInput {
        match self {
            Self::Tagged {
                timestamp,
                landmarks,
            } => FrameInput {
                label,
                timestamp,
                landmarks,
            },
            Self::Bare(landmarks) => FrameInput::new(label, landmarks),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FrameFile {
    Many(Vec<FrameRecord>),
    One(FrameRecord),
}

/// Filesystem landmark source adapter.
pub struct FsLandmarkSource {
    paths: Vec<PathBuf>,
    recursive: bool,
}

impl FsLandmarkSource {
    /// Creates a new filesystem landmark source.
    ///
    /// # Arguments
    ///
    /// * `paths` - Files or directories to scan
    /// * `recursive` - Whether to recurse into subdirectories
    #[must_use]
    pub const fn new(paths: Vec<PathBuf>, recursive: bool) -> Self {
        Self { paths, recursive }
    }

    /// Collects all frame files from the configured paths, sorted per directory.
    fn collect_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for path in &self.paths {
            if path.is_file() {
                if is_frame_file(path) {
                    files.push(path.clone());
                } else {
                    warn!("Unsupported file type: {}", path.display());
                }
            } else if path.is_dir() {
                self.collect_from_dir(path, &mut files);
            } else {
                warn!("Path does not exist: {}", path.display());
            }
        }

        files
    }

    fn collect_from_dir(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let entries = match std::fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                warn!("Failed to read directory {}: {e}", dir.display());
                return;
            }
        };

        let mut paths: Vec<PathBuf> = entries.flatten().map(|e| e.path()).collect();
        paths.sort();

        for path in paths {
            if path.is_file() && is_frame_file(&path) {
                files.push(path);
            } else if path.is_dir() && self.recursive {
                self.collect_from_dir(&path, files);
            }
        }
    }
}

impl LandmarkSource for FsLandmarkSource {
    fn frames(&self) -> Box<dyn Iterator<Item = Result<FrameInput>> + Send + '_> {
        let files = self.collect_files();
        debug!("Found {} frame files", files.len());

        Box::new(files.into_iter().flat_map(|path| load_frames(&path)))
    }

    fn count_hint(&self) -> Option<usize> {
        None
    }
}

/// Checks if a path has a supported frame file extension.
fn is_frame_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .is_some_and(|e| FRAME_EXTENSIONS.contains(&e.as_str()))
}

/// Loads every frame in a file. A file that cannot be read yields one error.
fn load_frames(path: &Path) -> Vec<Result<FrameInput>> {
    let content = match std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read frame file: {}", path.display()))
    {
        Ok(c) => c,
        Err(e) => return vec![Err(e)],
    };

    let is_lines = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jsonl"));

    if is_lines {
        parse_lines(&path.display().to_string(), &content)
    } else {
        parse_document(&path.display().to_string(), &content)
    }
}

/// Parses JSON Lines content; blank lines are ignored.
pub fn parse_lines(name: &str, content: &str) -> Vec<Result<FrameInput>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let label = format!("{name}:{}", i + 1);
            serde_json::from_str::<FrameRecord>(line)
                .with_context(|| format!("Invalid frame at {label}"))
                .map(|record| record.into_input(label))
        })
        .collect()
}

/// Parses a JSON document holding one frame or an array of frames.
pub fn parse_document(name: &str, content: &str) -> Vec<Result<FrameInput>> {
    match serde_json::from_str::<FrameFile>(content) {
        Ok(FrameFile::One(record)) => vec![Ok(record.into_input(name.to_owned()))],
        Ok(FrameFile::Many(records)) => records
            .into_iter()
            .enumerate()
            .map(|(i, record)| Ok(record.into_input(format!("{name}#{i}"))))
            .collect(),
        Err(e) => vec![Err(anyhow::Error::new(e).context(format!("Invalid frame file: {name}")))],
    }
}
