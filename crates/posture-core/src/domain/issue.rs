//! Issues reported when a posture check costs points.

use serde::{Deserialize, Serialize};

/// A posture problem found in a frame, with a suggested correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Check that produced this issue.
    pub check: CheckKind,
    /// Which tier of the check fired.
    pub severity: Severity,
    /// Points subtracted from the score.
    pub deduction: u32,
    /// What is wrong.
    pub problem: String,
    /// How to fix it.
    pub solution: String,
}

/// The posture checks, in evaluation order.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Head turned sideways (eye line tilted).
    HeadRotation,
    /// Neck leaning away from the shoulder midpoint.
    NeckAngle,
    /// Shoulder line tilted.
    ShoulderSlope,
    /// Nose offset horizontally from the shoulders.
    HeadForward,
    /// Shoulders at different heights (ratio).
    ShoulderHeight,
    /// Abnormal neck curve.
    CervicalLordosis,
    /// Head forward distance in millimetres.
    ForwardHeadDistance,
    /// Head tilted towards a shoulder.
    HeadTilt,
    /// Shoulders at different heights (millimetres).
    ShoulderHeightDistance,
    /// Elbows away from under the shoulders.
    ScapularWinging,
    /// Shoulders ahead of the hips.
    ShoulderForward,
}

impl CheckKind {
    /// Snake-case identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HeadRotation => "head_rotation",
            Self::NeckAngle => "neck_angle",
            Self::ShoulderSlope => "shoulder_slope",
            Self::HeadForward => "head_forward",
            Self::ShoulderHeight => "shoulder_height",
            Self::CervicalLordosis => "cervical_lordosis",
            Self::ForwardHeadDistance => "forward_head_distance",
            Self::HeadTilt => "head_tilt",
            Self::ShoulderHeightDistance => "shoulder_height_distance",
            Self::ScapularWinging => "scapular_winging",
            Self::ShoulderForward => "shoulder_forward",
        }
    }
}

/// Tier of a check that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Lower band of a two-tier check.
    Mild,
    /// Upper band, or the only band of a single-tier check.
    Severe,
}
