//! Scored snapshot types.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{Issue, PostureMetrics, PostureStatus};

/// Complete scoring result for a single frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredSnapshot {
    /// Frame label from the source, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// When the frame was captured or scored (RFC 3339).
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Derived measurements.
    pub metrics: PostureMetrics,
    /// Posture score, 0-100.
    pub score: u8,
    /// Status label derived from `score`.
    pub status_label: PostureStatus,
    /// Checks that cost points, in evaluation order.
    pub issues: Vec<Issue>,
}

impl ScoredSnapshot {
    /// Whether any check fired for this frame.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Sum of all deductions applied to this frame.
    #[must_use]
    pub fn total_deduction(&self) -> u32 {
        self.issues.iter().map(|i| i.deduction).sum()
    }
}
