//! Posture scorer: landmarks to metrics, score and issues.
//!
//! Scoring is a pure function of the frame and the scorer's immutable
//! configuration. A [`PostureScorer`] can be shared across threads and
//! called for independent frames in any order.

use time::OffsetDateTime;
use tracing::trace;

use crate::checks::standard_checks;
use crate::domain::{
    InvalidInputError, Issue, Landmark, LandmarkFrame, PostureCheck, PostureMetrics,
    PostureStatus, ScoredSnapshot,
};
use crate::measure::measure;

/// Score of a frame with no deductions.
pub const MAX_SCORE: u8 = 100;

/// Configuration for metric computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScorerConfig {
    /// Assumed frame width used to turn horizontal ratios into millimetres.
    pub frame_width: f64,
    /// Assumed frame height used to turn vertical ratios into millimetres.
    pub frame_height: f64,
    /// Horizontal shoulder-to-elbow offset above which a side counts as winging.
    pub winging_threshold: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            frame_width: 640.0,
            frame_height: 480.0,
            winging_threshold: 0.1,
        }
    }
}

/// Score, status and issues for one set of metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    /// Score clamped to 0-100.
    pub score: u8,
    /// Status derived from `score` alone.
    pub status: PostureStatus,
    /// Issues from every check that fired, in check order.
    pub issues: Vec<Issue>,
}

/// Posture scorer.
pub struct PostureScorer {
    config: ScorerConfig,
    checks: Vec<Box<dyn PostureCheck>>,
}

impl PostureScorer {
    /// Creates a scorer with the standard deduction table.
    #[must_use]
    pub fn new(config: ScorerConfig) -> Self {
        Self::with_checks(config, standard_checks())
    }

    /// Creates a scorer with a custom list of checks, evaluated in order.
    #[must_use]
    pub fn with_checks(config: ScorerConfig, checks: Vec<Box<dyn PostureCheck>>) -> Self {
        Self { config, checks }
    }

    /// Returns the scorer configuration.
    #[must_use]
    pub const fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Computes metrics for a validated frame.
    #[must_use]
    pub fn measure(&self, frame: &LandmarkFrame) -> PostureMetrics {
        measure(frame, &self.config)
    }

    /// Runs every check against the metrics and totals the deductions.
    #[must_use]
    pub fn assess(&self, metrics: &PostureMetrics) -> Assessment {
        let issues: Vec<Issue> = self
            .checks
            .iter()
            .filter_map(|check| check.evaluate(metrics))
            .collect();

        let total: u32 = issues.iter().map(|i| i.deduction).sum();
        let score = u8::try_from(u32::from(MAX_SCORE).saturating_sub(total)).unwrap_or(0);

        trace!(score, deduction = total, fired = issues.len(), "assessed metrics");

        Assessment {
            score,
            status: PostureStatus::from_score(score),
            issues,
        }
    }

    /// Scores a validated frame, stamping the snapshot with `timestamp`.
    #[must_use]
    pub fn score_frame(&self, frame: &LandmarkFrame, timestamp: OffsetDateTime) -> ScoredSnapshot {
        let metrics = self.measure(frame);
        let Assessment {
            score,
            status,
            issues,
        } = self.assess(&metrics);

        ScoredSnapshot {
            source: None,
            timestamp,
            metrics,
            score,
            status_label: status,
            issues,
        }
    }

    /// Validates raw landmarks and scores them.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] if the landmarks do not form a valid frame.
    pub fn score_landmarks(
        &self,
        landmarks: &[Landmark],
        timestamp: OffsetDateTime,
    ) -> Result<ScoredSnapshot, InvalidInputError> {
        let frame = LandmarkFrame::try_from(landmarks)?;
        Ok(self.score_frame(&frame, timestamp))
    }
}

impl Default for PostureScorer {
    fn default() -> Self {
        Self::new(ScorerConfig::default())
    }
}

impl std::fmt::Debug for PostureScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostureScorer")
            .field("config", &self.config)
            .field(
                "checks",
                &self.checks.iter().map(|c| c.kind()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Scores raw landmarks with the default scorer, stamped with the current time.
///
/// # Errors
///
/// Returns [`InvalidInputError`] if the landmarks do not form a valid frame.
pub fn score_frame(landmarks: &[Landmark]) -> Result<ScoredSnapshot, InvalidInputError> {
    PostureScorer::default().score_landmarks(landmarks, OffsetDateTime::now_utc())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::{CheckKind, LandmarkIndex as L, Severity};
    use time::macros::datetime;

    const AT: OffsetDateTime = datetime!(2024-03-01 12:00:00 UTC);

    fn landmarks(points: &[(L, f64, f64)]) -> Vec<Landmark> {
        let mut out = vec![Landmark::new(0.5, 0.5); L::COUNT];
        for &(idx, x, y) in points {
            out[idx.index()] = Landmark::new(x, y);
        }
        out
    }

    /// Shoulders level, elbows under shoulders, hips centred, eyes level,
    /// nose just above the shoulder line and slightly to the right.
    fn neutral() -> Vec<(L, f64, f64)> {
        vec![
            (L::Nose, 0.55, 0.38),
            (L::LeftShoulder, 0.4, 0.4),
            (L::RightShoulder, 0.6, 0.4),
            (L::LeftEar, 0.5, 0.4),
            (L::LeftEye, 0.53, 0.36),
            (L::RightEye, 0.57, 0.36),
            (L::LeftElbow, 0.4, 0.55),
            (L::RightElbow, 0.6, 0.55),
            (L::LeftHip, 0.42, 0.8),
            (L::RightHip, 0.58, 0.8),
        ]
    }

    fn with(mut base: Vec<(L, f64, f64)>, overrides: &[(L, f64, f64)]) -> Vec<Landmark> {
        for &(idx, x, y) in overrides {
            if let Some(slot) = base.iter_mut().find(|(i, _, _)| *i == idx) {
                *slot = (idx, x, y);
            } else {
                base.push((idx, x, y));
            }
        }
        landmarks(&base)
    }

    fn score(points: &[Landmark]) -> ScoredSnapshot {
        PostureScorer::default()
            .score_landmarks(points, AT)
            .expect("valid frame")
    }

    fn kinds(snapshot: &ScoredSnapshot) -> Vec<CheckKind> {
        snapshot.issues.iter().map(|i| i.check).collect()
    }

    #[test]
    fn test_neutral_frame_scores_full_marks() {
        let snapshot = score(&landmarks(&neutral()));
        assert_eq!(snapshot.score, 100);
        assert_eq!(snapshot.status_label, PostureStatus::Perfect);
        assert!(snapshot.issues.is_empty());
        assert_eq!(snapshot.timestamp, AT);
    }

    #[test]
    fn test_reference_frame_example() {
        let points = landmarks(&[
            (L::Nose, 0.5, 0.2),
            (L::LeftShoulder, 0.4, 0.4),
            (L::RightShoulder, 0.6, 0.4),
            (L::LeftEar, 0.35, 0.25),
            (L::LeftEye, 0.45, 0.2),
            (L::RightEye, 0.55, 0.2),
            (L::LeftHip, 0.4, 0.8),
            (L::RightHip, 0.6, 0.8),
            (L::LeftElbow, 0.4, 0.5),
            (L::RightElbow, 0.6, 0.5),
        ]);
        let snapshot = score(&points);

        assert!((snapshot.metrics.neck_angle + 90.0).abs() < 1e-9);
        assert!(snapshot.metrics.shoulder_slope.abs() < 1e-9);
        assert_eq!(
            kinds(&snapshot),
            vec![
                CheckKind::NeckAngle,
                CheckKind::CervicalLordosis,
                CheckKind::HeadTilt
            ]
        );
        assert_eq!(snapshot.issues[0].severity, Severity::Severe);
        assert_eq!(snapshot.issues[0].deduction, 12);
        assert_eq!(snapshot.score, 100 - 12 - 5 - 6);
        assert_eq!(snapshot.status_label, PostureStatus::Good);
    }

    #[test]
    fn test_upright_nose_costs_severe_neck_deduction() {
        // Nose straight above the shoulder midpoint measures -90 degrees.
        let points = with(neutral(), &[(L::Nose, 0.5, 0.35)]);
        let snapshot = score(&points);
        assert_eq!(snapshot.issues[0].check, CheckKind::NeckAngle);
        assert_eq!(snapshot.issues[0].severity, Severity::Severe);
    }

    #[test]
    fn test_three_severe_checks_add_up() {
        let points = with(
            neutral(),
            &[
                (L::Nose, 0.655, 0.26),
                (L::RightShoulder, 0.6, 0.44),
                (L::RightElbow, 0.6, 0.6),
            ],
        );
        let snapshot = score(&points);

        assert_eq!(
            kinds(&snapshot),
            vec![
                CheckKind::NeckAngle,
                CheckKind::ShoulderSlope,
                CheckKind::HeadForward
            ]
        );
        assert!(snapshot
            .issues
            .iter()
            .all(|i| i.severity == Severity::Severe));
        assert_eq!(snapshot.score, 63);
        assert_eq!(snapshot.status_label, PostureStatus::Good);
    }

    #[test]
    fn test_assess_three_severe_metrics() {
        let metrics = PostureMetrics {
            neck_angle: 50.0,
            shoulder_slope: -12.0,
            head_forward: 0.2,
            ..Default::default()
        };
        let assessment = PostureScorer::default().assess(&metrics);
        assert_eq!(assessment.score, 100 - 12 - 10 - 15);
        assert_eq!(assessment.status, PostureStatus::Good);
    }

    #[test]
    fn test_head_forward_boundary_is_strict() {
        let scorer = PostureScorer::default();

        let at = PostureMetrics {
            head_forward: 0.15,
            ..Default::default()
        };
        let assessment = scorer.assess(&at);
        assert_eq!(assessment.issues.len(), 1);
        assert_eq!(assessment.issues[0].severity, Severity::Mild);
        assert_eq!(assessment.score, 92);

        let over = PostureMetrics {
            head_forward: 0.150_000_1,
            ..Default::default()
        };
        let assessment = scorer.assess(&over);
        assert_eq!(assessment.issues[0].severity, Severity::Severe);
        assert_eq!(assessment.score, 85);
    }

    #[test]
    fn test_winging_deducts_once_for_any_side() {
        let scorer = PostureScorer::default();
        for (left, right) in [(true, false), (false, true), (true, true)] {
            let metrics = PostureMetrics {
                left_scapular_winging: left,
                right_scapular_winging: right,
                ..Default::default()
            };
            assert_eq!(scorer.assess(&metrics).score, 96, "left={left} right={right}");
        }
    }

    #[test]
    fn test_score_is_clamped_at_zero() {
        let metrics = PostureMetrics {
            head_rotation: 90.0,
            neck_angle: 90.0,
            shoulder_slope: 45.0,
            head_forward: 0.5,
            shoulder_height_diff: 0.5,
            cervical_lordosis: 90.0,
            forward_head_distance: 500.0,
            head_tilt: 90.0,
            left_shoulder_height_diff: 200.0,
            left_scapular_winging: true,
            right_scapular_winging: true,
            shoulder_forward_movement: 400.0,
        };
        let assessment = PostureScorer::default().assess(&metrics);
        // 4 + 12 + 10 + 15 + 8 + 5 + 8 + 6 + 6 + 4 + 5 = 83
        assert_eq!(assessment.issues.len(), 11);
        assert_eq!(assessment.score, 17);
        assert_eq!(assessment.status, PostureStatus::Bad);

        let heavy = PostureScorer::with_checks(
            ScorerConfig::default(),
            (0..3).flat_map(|_| standard_checks()).collect(),
        );
        assert_eq!(heavy.assess(&metrics).score, 0);
    }

    #[test]
    fn test_neck_angle_monotonic_past_mild_threshold() {
        let scorer = PostureScorer::default();
        let score_at = |deg: f64| {
            scorer
                .assess(&PostureMetrics {
                    neck_angle: deg,
                    ..Default::default()
                })
                .score
        };

        let mut previous = score_at(30.0);
        for step in 1..=60 {
            let current = score_at(30.0 + f64::from(step));
            assert!(current <= previous, "score rose at {}", 30 + step);
            previous = current;
        }
        assert!(score_at(44.9) - score_at(45.1) >= 6);
        assert!(score_at(-44.9) - score_at(-45.1) >= 6);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let points = with(neutral(), &[(L::Nose, 0.7, 0.2), (L::LeftElbow, 0.2, 0.6)]);
        let scorer = PostureScorer::default();
        let first = scorer.score_landmarks(&points, AT).unwrap();
        for _ in 0..5 {
            assert_eq!(scorer.score_landmarks(&points, AT).unwrap(), first);
        }
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let scorer = PostureScorer::default();
        assert!(matches!(
            scorer.score_landmarks(&[], AT),
            Err(InvalidInputError::LandmarkCount { found: 0, .. })
        ));

        let mut points = landmarks(&neutral());
        points[L::Nose.index()].y = f64::NAN;
        assert!(matches!(
            scorer.score_landmarks(&points, AT),
            Err(InvalidInputError::NonFiniteLandmark { index: 0, .. })
        ));
    }

    #[test]
    fn test_free_function_uses_default_scorer() {
        let snapshot = score_frame(&landmarks(&neutral())).unwrap();
        assert_eq!(snapshot.score, 100);
        assert!(score_frame(&landmarks(&neutral())[..10]).is_err());
    }

    #[test]
    fn test_scorer_is_shareable_across_threads() {
        let scorer = std::sync::Arc::new(PostureScorer::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let scorer = std::sync::Arc::clone(&scorer);
                std::thread::spawn(move || {
                    scorer
                        .score_landmarks(&landmarks(&neutral()), AT)
                        .unwrap()
                        .score
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 100);
        }
    }
}
