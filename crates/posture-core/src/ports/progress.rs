//! Progress reporting port for UI integration.

use crate::domain::ScoredSnapshot;

/// Events emitted while a session runs.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Scoring started for a frame.
    Started {
        /// Frame label.
        label: String,
        /// Index in the session (0-based).
        index: usize,
        /// Total frames in the session, if known.
        total: Option<usize>,
    },
    /// A frame was scored.
    Scored {
        /// The scored snapshot.
        snapshot: ScoredSnapshot,
    },
    /// A frame was skipped because it failed to load or validate.
    Skipped {
        /// Frame label.
        label: String,
        /// Reason for skipping.
        reason: String,
    },
    /// The source is exhausted.
    Finished {
        /// Frames scored.
        processed: usize,
        /// Frames skipped.
        skipped: usize,
    },
}

/// Port for receiving progress events.
pub trait ProgressSink: Send + Sync {
    /// Called when a progress event occurs.
    fn on_event(&self, event: ProgressEvent);
}
