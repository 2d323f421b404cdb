//! Synthetic landmark frame builders for testing.

use posture_core::{FrameInput, Landmark, LandmarkIndex as L};
use time::OffsetDateTime;

/// Builder for creating synthetic 33-point landmark frames.
///
/// Unscored landmarks sit at the frame centre. Presets place the ten scored
/// landmarks to produce a known score under the default scorer config.
#[derive(Debug, Clone)]
pub struct SyntheticFrameBuilder {
    landmarks: Vec<Landmark>,
}

impl SyntheticFrameBuilder {
    /// Creates a frame with every landmark at `(0.5, 0.5)`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            landmarks: vec![Landmark::new(0.5, 0.5); L::COUNT],
        }
    }

    // === Presets ===

    /// Level shoulders, elbows under the shoulders, head slightly forward.
    ///
    /// Scores 100 with no issues.
    #[must_use]
    pub fn neutral() -> Self {
        Self::new()
            .with(L::Nose, 0.55, 0.38)
            .with(L::LeftShoulder, 0.4, 0.4)
            .with(L::RightShoulder, 0.6, 0.4)
            .with(L::LeftEar, 0.5, 0.4)
            .with(L::LeftEye, 0.53, 0.36)
            .with(L::RightEye, 0.57, 0.36)
            .with(L::LeftElbow, 0.4, 0.55)
            .with(L::RightElbow, 0.6, 0.55)
            .with(L::LeftHip, 0.42, 0.8)
            .with(L::RightHip, 0.58, 0.8)
    }

    /// Nose straight above the shoulder midpoint.
    ///
    /// Scores 77: neck angle -90° (severe), cervical lordosis and head tilt.
    #[must_use]
    pub fn upright() -> Self {
        Self::new()
            .with(L::Nose, 0.5, 0.2)
            .with(L::LeftShoulder, 0.4, 0.4)
            .with(L::RightShoulder, 0.6, 0.4)
            .with(L::LeftEar, 0.35, 0.25)
            .with(L::LeftEye, 0.45, 0.2)
            .with(L::RightEye, 0.55, 0.2)
            .with(L::LeftHip, 0.4, 0.8)
            .with(L::RightHip, 0.6, 0.8)
            .with(L::LeftElbow, 0.4, 0.5)
            .with(L::RightElbow, 0.6, 0.5)
    }

    /// Head pushed forward with a dropped right shoulder.
    ///
    /// Scores 63: severe neck angle, shoulder slope and head forward.
    #[must_use]
    pub fn slouched() -> Self {
        Self::neutral()
            .with(L::Nose, 0.655, 0.26)
            .with(L::RightShoulder, 0.6, 0.44)
            .with(L::RightElbow, 0.6, 0.6)
    }

    /// Rotated head, tilted shoulders, winging and torso lean.
    ///
    /// Scores 44 ("bad") from eight triggered checks.
    #[must_use]
    pub fn collapsed() -> Self {
        Self::neutral()
            .with(L::Nose, 0.75, 0.3)
            .with(L::RightShoulder, 0.6, 0.48)
            .with(L::LeftEye, 0.7, 0.28)
            .with(L::RightEye, 0.74, 0.32)
            .with(L::LeftElbow, 0.25, 0.6)
            .with(L::LeftEar, 0.45, 0.3)
            .with(L::LeftHip, 0.1, 0.8)
            .with(L::RightHip, 0.26, 0.8)
    }

    // === Modifiers ===

    /// Moves one landmark.
    #[must_use]
    pub fn with(mut self, index: L, x: f64, y: f64) -> Self {
        self.landmarks[index.index()] = Landmark::new(x, y);
        self
    }

    /// Drops landmarks from the end, leaving `count`.
    #[must_use]
    pub fn truncated(mut self, count: usize) -> Self {
        self.landmarks.truncate(count);
        self
    }

    /// Makes one landmark's x coordinate NaN.
    #[must_use]
    pub fn with_nan(mut self, index: L) -> Self {
        self.landmarks[index.index()].x = f64::NAN;
        self
    }

    // === Output ===

    /// Returns the landmarks.
    #[must_use]
    pub fn build(self) -> Vec<Landmark> {
        self.landmarks
    }

    /// Wraps the landmarks in a [`FrameInput`].
    #[must_use]
    pub fn input(self, label: &str) -> FrameInput {
        FrameInput::new(label, self.landmarks)
    }

    /// Wraps the landmarks in a [`FrameInput`] with a capture time.
    #[must_use]
    pub fn input_at(self, label: &str, timestamp: OffsetDateTime) -> FrameInput {
        FrameInput {
            label: label.to_owned(),
            timestamp: Some(timestamp),
            landmarks: self.landmarks,
        }
    }

    /// Serializes the landmarks as a bare JSON array, one recording line.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.landmarks).unwrap_or_default()
    }
}

impl Default for SyntheticFrameBuilder {
    fn default() -> Self {
        Self::new()
    }
}
