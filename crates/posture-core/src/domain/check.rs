//! Posture check trait for pluggable deduction rules.

use super::{CheckKind, Issue, PostureMetrics};

/// A single deduction rule evaluated against a frame's metrics.
///
/// Each check looks at its own metric and either stays silent or returns one
/// issue carrying the points to deduct. Checks never see each other's results.
pub trait PostureCheck: Send + Sync {
    /// Which check this is.
    fn kind(&self) -> CheckKind;

    /// Evaluates the metrics and returns the issue if the check fires.
    fn evaluate(&self, metrics: &PostureMetrics) -> Option<Issue>;
}
