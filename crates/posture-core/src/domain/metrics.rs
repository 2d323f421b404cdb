//! Ergonomic metrics derived from one landmark frame.

use serde::{Deserialize, Serialize};

/// The measurement set for one frame.
///
/// Angles are in degrees, distances in millimetres estimated from the
/// configured frame scale, ratios in normalized image units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostureMetrics {
    /// Angle of the shoulder-midpoint to nose vector.
    pub neck_angle: f64,
    /// Angle of the left-shoulder to right-shoulder vector.
    pub shoulder_slope: f64,
    /// Horizontal nose offset from the shoulder midpoint (ratio).
    pub head_forward: f64,
    /// Vertical gap between the shoulders (ratio).
    pub shoulder_height_diff: f64,
    /// Angle of the left-shoulder to nose vector.
    pub cervical_lordosis: f64,
    /// Horizontal nose offset scaled by frame width.
    pub forward_head_distance: f64,
    /// Angle of the left-shoulder to left-ear vector.
    pub head_tilt: f64,
    /// Angle of the left-eye to right-eye vector.
    pub head_rotation: f64,
    /// Vertical gap between the shoulders scaled by frame height.
    pub left_shoulder_height_diff: f64,
    /// Left elbow sits far from under the left shoulder.
    pub left_scapular_winging: bool,
    /// Right elbow sits far from under the right shoulder.
    pub right_scapular_winging: bool,
    /// Horizontal shoulder-midpoint offset from the hip midpoint, scaled by frame width.
    pub shoulder_forward_movement: f64,
}

impl PostureMetrics {
    /// Presentation view with one-decimal rounding and percent ratios.
    ///
    /// Thresholds are always applied to the unrounded values.
    #[must_use]
    pub fn display(&self) -> MetricsDisplay {
        MetricsDisplay {
            neck_angle: round1(self.neck_angle),
            shoulder_slope: round1(self.shoulder_slope),
            head_forward_pct: round1(self.head_forward * 100.0),
            shoulder_height_diff_pct: round1(self.shoulder_height_diff * 100.0),
            cervical_lordosis: round1(self.cervical_lordosis),
            forward_head_distance: round1(self.forward_head_distance),
            head_tilt: round1(self.head_tilt),
            head_rotation: round1(self.head_rotation),
            left_shoulder_height_diff: round1(self.left_shoulder_height_diff),
            left_scapular_winging: self.left_scapular_winging,
            right_scapular_winging: self.right_scapular_winging,
            shoulder_forward_movement: round1(self.shoulder_forward_movement),
        }
    }
}

/// Metrics rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsDisplay {
    pub neck_angle: f64,
    pub shoulder_slope: f64,
    pub head_forward_pct: f64,
    pub shoulder_height_diff_pct: f64,
    pub cervical_lordosis: f64,
    pub forward_head_distance: f64,
    pub head_tilt: f64,
    pub head_rotation: f64,
    pub left_shoulder_height_diff: f64,
    pub left_scapular_winging: bool,
    pub right_scapular_winging: bool,
    pub shoulder_forward_movement: f64,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
