//! Low-score alerting.

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::{Issue, PostureStatus, ScoredSnapshot};

/// Alert raised when posture drops below the configured score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostureAlert {
    /// Score of the frame that triggered the alert.
    pub score: u8,
    /// Status of that frame.
    pub status: PostureStatus,
    /// Threshold the score fell below.
    pub threshold: u8,
    /// Issues of that frame.
    pub issues: Vec<Issue>,
    /// Frame time.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Decides when a snapshot should raise an alert.
///
/// Edge-triggered: one alert when the score first drops below the threshold,
/// then silence until a frame scores at or above it again.
#[derive(Debug, Clone)]
pub struct AlertPolicy {
    threshold: u8,
    below: bool,
}

impl AlertPolicy {
    /// Default alert threshold; matches the lower bound of the "normal" status.
    pub const DEFAULT_THRESHOLD: u8 = 50;

    /// Creates a policy that alerts on scores strictly below `threshold`.
    #[must_use]
    pub const fn new(threshold: u8) -> Self {
        Self {
            threshold,
            below: false,
        }
    }

    /// Returns the threshold.
    #[must_use]
    pub const fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Feeds the next snapshot and returns an alert if one is due.
    pub fn observe(&mut self, snapshot: &ScoredSnapshot) -> Option<PostureAlert> {
        if snapshot.score >= self.threshold {
            self.below = false;
            return None;
        }
        if self.below {
            return None;
        }
        self.below = true;
        Some(PostureAlert {
            score: snapshot.score,
            status: snapshot.status_label,
            threshold: self.threshold,
            issues: snapshot.issues.clone(),
            timestamp: snapshot.timestamp,
        })
    }

    /// Forgets whether the last frame was below the threshold.
    pub fn reset(&mut self) {
        self.below = false;
    }
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}
