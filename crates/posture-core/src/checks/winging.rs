//! Scapular winging check.

use crate::domain::{CheckKind, Issue, PostureCheck, PostureMetrics, Severity};

/// Points deducted when either side shows winging.
pub const WINGING_DEDUCTION: u32 = 4;

/// Deducts once when either shoulder blade protrudes. Both sides together
/// still cost a single deduction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScapularWingingCheck;

impl PostureCheck for ScapularWingingCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::ScapularWinging
    }

    fn evaluate(&self, metrics: &PostureMetrics) -> Option<Issue> {
        (metrics.left_scapular_winging || metrics.right_scapular_winging).then(|| Issue {
            check: CheckKind::ScapularWinging,
            severity: Severity::Severe,
            deduction: WINGING_DEDUCTION,
            problem: "Shoulder blades are protruding".to_owned(),
            solution: "Draw your shoulders back and open up your chest.".to_owned(),
        })
    }
}
