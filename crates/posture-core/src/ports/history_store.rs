//! History store port for keeping scored snapshots.

use crate::domain::ScoredSnapshot;

/// Port for an append-only, time-ordered log of scored snapshots.
///
/// Implementations may bound the log and evict the oldest entries.
pub trait HistoryStore: Send + Sync {
    /// Appends a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted.
    fn append(&self, snapshot: &ScoredSnapshot) -> anyhow::Result<()>;

    /// Returns every stored snapshot, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read.
    fn snapshots(&self) -> anyhow::Result<Vec<ScoredSnapshot>>;

    /// Removes every stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be cleared.
    fn clear(&self) -> anyhow::Result<()>;
}
