//! Snapshot output port for presenting scoring results.

use crate::domain::ScoredSnapshot;

/// Port for outputting scored snapshots.
pub trait SnapshotOutput: Send + Sync {
    /// Writes a single snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write(&self, snapshot: &ScoredSnapshot) -> anyhow::Result<()>;

    /// Flushes any buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    fn flush(&self) -> anyhow::Result<()>;
}
