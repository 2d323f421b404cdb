//! Metric computation from a validated landmark frame.

use crate::domain::{LandmarkFrame, LandmarkIndex as L, PostureMetrics};
use crate::geometry::{angle_deg, dist_x, dist_y, midpoint};
use crate::scorer::ScorerConfig;

/// Computes every posture metric for one frame.
///
/// Distances in millimetres multiply a normalized offset by the configured
/// frame width or height.
#[must_use]
pub fn measure(frame: &LandmarkFrame, config: &ScorerConfig) -> PostureMetrics {
    let nose = frame.get(L::Nose);
    let left_shoulder = frame.get(L::LeftShoulder);
    let right_shoulder = frame.get(L::RightShoulder);
    let left_ear = frame.get(L::LeftEar);
    let left_eye = frame.get(L::LeftEye);
    let right_eye = frame.get(L::RightEye);
    let left_hip = frame.get(L::LeftHip);
    let right_hip = frame.get(L::RightHip);
    let left_elbow = frame.get(L::LeftElbow);
    let right_elbow = frame.get(L::RightElbow);

    let shoulder_mid = midpoint(left_shoulder, right_shoulder);
    let hip_mid = midpoint(left_hip, right_hip);

    let head_forward = dist_x(nose, shoulder_mid);
    let shoulder_height_diff = dist_y(left_shoulder, right_shoulder);

    PostureMetrics {
        neck_angle: angle_deg(shoulder_mid, nose),
        shoulder_slope: angle_deg(left_shoulder, right_shoulder),
        head_forward,
        shoulder_height_diff,
        cervical_lordosis: angle_deg(left_shoulder, nose),
        forward_head_distance: head_forward * config.frame_width,
        head_tilt: angle_deg(left_shoulder, left_ear),
        head_rotation: angle_deg(left_eye, right_eye),
        left_shoulder_height_diff: shoulder_height_diff * config.frame_height,
        left_scapular_winging: dist_x(left_shoulder, left_elbow) > config.winging_threshold,
        right_scapular_winging: dist_x(right_shoulder, right_elbow) > config.winging_threshold,
        shoulder_forward_movement: dist_x(shoulder_mid, hip_mid) * config.frame_width,
    }
}
