//! Tiered threshold check over one scalar metric.

use crate::domain::{CheckKind, Issue, PostureCheck, PostureMetrics, Severity};

/// One band of a threshold check.
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    /// The measured value must be strictly greater than this to fire.
    pub above: f64,
    /// Points deducted when this tier fires.
    pub deduction: u32,
    /// Severity reported for this tier.
    pub severity: Severity,
    /// Problem text.
    pub problem: &'static str,
    /// Suggested correction.
    pub solution: &'static str,
}

/// Reads one value out of the metrics. Absolute-value checks take `abs()` here.
pub type Measure = fn(&PostureMetrics) -> f64;

/// Fires the first tier whose threshold the measured value exceeds.
///
/// Tiers are ordered most severe first, so at most one fires per check.
#[derive(Debug, Clone)]
pub struct ThresholdCheck {
    kind: CheckKind,
    measure: Measure,
    tiers: &'static [Tier],
}

impl ThresholdCheck {
    /// Creates a check from a metric accessor and its tiers.
    #[must_use]
    pub const fn new(kind: CheckKind, measure: Measure, tiers: &'static [Tier]) -> Self {
        Self {
            kind,
            measure,
            tiers,
        }
    }

    /// Tiers, most severe first.
    #[must_use]
    pub const fn tiers(&self) -> &'static [Tier] {
        self.tiers
    }
}

impl PostureCheck for ThresholdCheck {
    fn kind(&self) -> CheckKind {
        self.kind
    }

    fn evaluate(&self, metrics: &PostureMetrics) -> Option<Issue> {
        let value = (self.measure)(metrics);
        self.tiers.iter().find(|t| value > t.above).map(|t| Issue {
            check: self.kind,
            severity: t.severity,
            deduction: t.deduction,
            problem: t.problem.to_owned(),
            solution: t.solution.to_owned(),
        })
    }
}
