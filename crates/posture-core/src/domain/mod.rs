//! Core domain types for posture scoring.

mod check;
mod error;
mod issue;
mod landmark;
mod metrics;
mod snapshot;
mod status;

pub use check::PostureCheck;
pub use error::InvalidInputError;
pub use issue::{CheckKind, Issue, Severity};
pub use landmark::{FrameInput, Landmark, LandmarkFrame, LandmarkIndex};
pub use metrics::{MetricsDisplay, PostureMetrics};
pub use snapshot::ScoredSnapshot;
pub use status::PostureStatus;
