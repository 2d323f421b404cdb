//! Posture check implementations.
//!
//! [`standard_checks`] returns the full deduction table in evaluation order.
//! Issue order in a snapshot follows this order.

mod threshold;
mod winging;

pub use threshold::{Measure, ThresholdCheck, Tier};
pub use winging::{ScapularWingingCheck, WINGING_DEDUCTION};

use crate::domain::{CheckKind, PostureCheck, PostureMetrics, Severity};

const fn severe(above: f64, deduction: u32, problem: &'static str, solution: &'static str) -> Tier {
    Tier {
        above,
        deduction,
        severity: Severity::Severe,
        problem,
        solution,
    }
}

const fn mild(above: f64, deduction: u32, problem: &'static str, solution: &'static str) -> Tier {
    Tier {
        above,
        deduction,
        severity: Severity::Mild,
        problem,
        solution,
    }
}

const HEAD_ROTATION: &[Tier] = &[severe(
    15.0,
    4,
    "Head is turned well to the side",
    "Turn your head to face the screen.",
)];

const NECK_ANGLE: &[Tier] = &[
    severe(
        45.0,
        12,
        "Neck is strongly tilted",
        "Bring your neck back to centre and tuck your chin towards your chest. Stretch your neck regularly.",
    ),
    mild(
        30.0,
        6,
        "Neck is slightly tilted",
        "Bring your neck back to centre.",
    ),
];

const SHOULDER_SLOPE: &[Tier] = &[
    severe(
        10.0,
        10,
        "Shoulders are strongly tilted",
        "Level your shoulders. Stretch your shoulders regularly.",
    ),
    mild(
        5.0,
        5,
        "Shoulders are slightly tilted",
        "Level your shoulders.",
    ),
];

const HEAD_FORWARD: &[Tier] = &[
    severe(
        0.15,
        15,
        "Head is pushed far forward",
        "Tuck your chin and draw your head back. Stretch your neck regularly.",
    ),
    mild(
        0.1,
        8,
        "Head is slightly forward",
        "Tuck your chin towards your chest.",
    ),
];

const SHOULDER_HEIGHT: &[Tier] = &[
    severe(
        0.1,
        8,
        "Shoulder heights differ a lot",
        "Level your shoulders. Stretch your shoulders regularly.",
    ),
    mild(
        0.05,
        4,
        "Shoulder heights differ slightly",
        "Level your shoulders.",
    ),
];

const CERVICAL_LORDOSIS: &[Tier] = &[severe(
    30.0,
    5,
    "Neck curve is abnormal",
    "Stretch your neck regularly.",
)];

const FORWARD_HEAD_DISTANCE: &[Tier] = &[severe(
    100.0,
    8,
    "Head is far in front of the shoulders",
    "Tuck your chin towards your chest.",
)];

const HEAD_TILT: &[Tier] = &[severe(
    15.0,
    6,
    "Head is tilted towards one shoulder",
    "Bring your head back to centre.",
)];

const SHOULDER_HEIGHT_DISTANCE: &[Tier] = &[severe(
    40.0,
    6,
    "One shoulder sits much higher than the other",
    "Level your shoulders.",
)];

const SHOULDER_FORWARD: &[Tier] = &[severe(
    150.0,
    5,
    "Shoulders are rolled far forward",
    "Draw your shoulders back and open up your chest.",
)];

fn head_rotation(m: &PostureMetrics) -> f64 {
    m.head_rotation.abs()
}

fn neck_angle(m: &PostureMetrics) -> f64 {
    m.neck_angle.abs()
}

fn shoulder_slope(m: &PostureMetrics) -> f64 {
    m.shoulder_slope.abs()
}

fn head_forward(m: &PostureMetrics) -> f64 {
    m.head_forward
}

fn shoulder_height(m: &PostureMetrics) -> f64 {
    m.shoulder_height_diff
}

fn cervical_lordosis(m: &PostureMetrics) -> f64 {
    m.cervical_lordosis.abs()
}

fn forward_head_distance(m: &PostureMetrics) -> f64 {
    m.forward_head_distance
}

fn head_tilt(m: &PostureMetrics) -> f64 {
    m.head_tilt.abs()
}

fn shoulder_height_distance(m: &PostureMetrics) -> f64 {
    m.left_shoulder_height_diff
}

fn shoulder_forward(m: &PostureMetrics) -> f64 {
    m.shoulder_forward_movement
}

/// The standard deduction table, in evaluation order.
#[must_use]
pub fn standard_checks() -> Vec<Box<dyn PostureCheck>> {
    vec![
        Box::new(ThresholdCheck::new(CheckKind::HeadRotation, head_rotation, HEAD_ROTATION)),
        Box::new(ThresholdCheck::new(CheckKind::NeckAngle, neck_angle, NECK_ANGLE)),
        Box::new(ThresholdCheck::new(CheckKind::ShoulderSlope, shoulder_slope, SHOULDER_SLOPE)),
        Box::new(ThresholdCheck::new(CheckKind::HeadForward, head_forward, HEAD_FORWARD)),
        Box::new(ThresholdCheck::new(CheckKind::ShoulderHeight, shoulder_height, SHOULDER_HEIGHT)),
        Box::new(ThresholdCheck::new(
            CheckKind::CervicalLordosis,
            cervical_lordosis,
            CERVICAL_LORDOSIS,
        )),
        Box::new(ThresholdCheck::new(
            CheckKind::ForwardHeadDistance,
            forward_head_distance,
            FORWARD_HEAD_DISTANCE,
        )),
        Box::new(ThresholdCheck::new(CheckKind::HeadTilt, head_tilt, HEAD_TILT)),
        Box::new(ThresholdCheck::new(
            CheckKind::ShoulderHeightDistance,
            shoulder_height_distance,
            SHOULDER_HEIGHT_DISTANCE,
        )),
        Box::new(ScapularWingingCheck),
        Box::new(ThresholdCheck::new(
            CheckKind::ShoulderForward,
            shoulder_forward,
            SHOULDER_FORWARD,
        )),
    ]
}
