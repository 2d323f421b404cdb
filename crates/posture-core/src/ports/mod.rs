//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the scoring core and the
//! adapters that deliver frames, persist history and reach the user.

mod history_store;
mod landmark_source;
mod notifier;
mod progress;
mod snapshot_output;

pub use history_store::HistoryStore;
pub use landmark_source::LandmarkSource;
pub use notifier::Notifier;
pub use progress::{ProgressEvent, ProgressSink};
pub use snapshot_output::SnapshotOutput;
