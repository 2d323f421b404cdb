//! Bounded posture history stores.
//!
//! Both stores keep the most recent snapshots, oldest first, and evict from
//! the front once `capacity` is reached.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use anyhow::{Context, Result};
use posture_core::{HistoryStore, ScoredSnapshot};
use tracing::{debug, warn};

/// Default number of snapshots retained.
pub const DEFAULT_CAPACITY: usize = 100;

fn push_bounded(entries: &mut VecDeque<ScoredSnapshot>, snapshot: ScoredSnapshot, capacity: usize) {
    entries.push_back(snapshot);
    while entries.len() > capacity {
        entries.pop_front();
    }
}

/// In-memory history, lost when dropped.
#[derive(Debug)]
pub struct MemoryHistory {
    capacity: usize,
    entries: Mutex<VecDeque<ScoredSnapshot>>,
}

impl MemoryHistory {
    /// Creates an empty history holding at most `capacity` snapshots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY))),
        }
    }

    /// Returns the capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&self, snapshot: &ScoredSnapshot) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        push_bounded(&mut entries, snapshot.clone(), self.capacity);
        Ok(())
    }

    fn snapshots(&self) -> Result<Vec<ScoredSnapshot>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.iter().cloned().collect())
    }

    fn clear(&self) -> Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        Ok(())
    }
}

/// History persisted as a JSON array file.
///
/// The file is read once on open and rewritten after every append.
#[derive(Debug)]
pub struct JsonFileHistory {
    path: PathBuf,
    capacity: usize,
    entries: Mutex<VecDeque<ScoredSnapshot>>,
}

impl JsonFileHistory {
    /// Opens the history at `path`. A missing file is an empty history.
    ///
    /// When the file holds more than `capacity` snapshots only the newest
    /// are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>, capacity: usize) -> Result<Self> {
        let path = path.into();
        let mut entries = VecDeque::new();

        for snapshot in read_file(&path)? {
            push_bounded(&mut entries, snapshot, capacity);
        }
        debug!(
            "Loaded {} history record(s) from {}",
            entries.len(),
            path.display()
        );

        Ok(Self {
            path,
            capacity,
            entries: Mutex::new(entries),
        })
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the history file at `path` without reading it.
    ///
    /// Returns `false` when there was no file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn remove(path: &Path) -> Result<bool> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => {
                warn!("Failed to remove history file {}: {e}", path.display());
                Err(e).with_context(|| {
                    format!("Failed to remove history file: {}", path.display())
                })
            }
        }
    }

    fn persist(&self, entries: &VecDeque<ScoredSnapshot>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create history directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string(entries).context("Failed to serialize history")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write history file: {}", self.path.display()))
    }
}

fn read_file(path: &Path) -> Result<Vec<ScoredSnapshot>> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read history file: {}", path.display()))
        }
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content)
        .with_context(|| format!("Invalid history file: {}", path.display()))
}

impl HistoryStore for JsonFileHistory {
    fn append(&self, snapshot: &ScoredSnapshot) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let mut updated = entries.clone();
        push_bounded(&mut updated, snapshot.clone(), self.capacity);
        self.persist(&updated)?;
        *entries = updated;
        Ok(())
    }

    fn snapshots(&self) -> Result<Vec<ScoredSnapshot>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.iter().cloned().collect())
    }

    fn clear(&self) -> Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        Self::remove(&self.path).map(|_| ())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use posture_core::{PostureMetrics, PostureStatus};
    use time::macros::datetime;

    fn snap(score: u8) -> ScoredSnapshot {
        ScoredSnapshot {
            source: Some(format!("frame-{score}")),
            timestamp: datetime!(2024-03-01 12:00:00 UTC),
            metrics: PostureMetrics::default(),
            score,
            status_label: PostureStatus::from_score(score),
            issues: Vec::new(),
        }
    }

    fn scores(store: &dyn HistoryStore) -> Vec<u8> {
        store.snapshots().unwrap().iter().map(|s| s.score).collect()
    }

    #[test]
    fn test_memory_history_evicts_oldest() {
        let history = MemoryHistory::new(3);
        for score in [10, 20, 30, 40, 50] {
            history.append(&snap(score)).unwrap();
        }
        assert_eq!(scores(&history), vec![30, 40, 50]);
    }

    #[test]
    fn test_memory_history_clear() {
        let history = MemoryHistory::default();
        history.append(&snap(70)).unwrap();
        history.clear().unwrap();
        assert!(history.snapshots().unwrap().is_empty());
        assert_eq!(history.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_push_bounded_zero_capacity() {
        let mut entries = VecDeque::new();
        push_bounded(&mut entries, snap(1), 0);
        assert!(entries.is_empty());
    }
}
