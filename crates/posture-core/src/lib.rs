//! Posture Core - Domain logic for posture scoring
//!
//! This crate turns a single frame of pose landmarks into ergonomic metrics,
//! a 0-100 posture score and the list of issues that cost points. It also
//! holds the port traits the adapters implement and the session loop that
//! drives frames from a source through the scorer.

pub mod checks;
pub mod domain;
pub mod geometry;
pub mod measure;
pub mod ports;
pub mod scorer;
pub mod session;
pub mod summary;

mod alert;

pub use alert::{AlertPolicy, PostureAlert};
pub use domain::{
    CheckKind, FrameInput, InvalidInputError, Issue, Landmark, LandmarkFrame, LandmarkIndex,
    MetricsDisplay, PostureCheck, PostureMetrics, PostureStatus, ScoredSnapshot, Severity,
};
pub use ports::{
    HistoryStore, LandmarkSource, Notifier, ProgressEvent, ProgressSink, SnapshotOutput,
};
pub use scorer::{score_frame, Assessment, PostureScorer, ScorerConfig};
pub use session::{Session, SessionReport};
pub use summary::{HistorySummary, TimeFilter};
