//! Pose landmarks and validated landmark frames.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::InvalidInputError;

/// The 33 body landmarks of the BlazePose topology, by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum LandmarkIndex {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl LandmarkIndex {
    /// Number of landmarks in one frame.
    pub const COUNT: usize = 33;

    /// Landmarks the scorer reads. Only these are checked for finite coordinates.
    pub const SCORED: [Self; 10] = [
        Self::Nose,
        Self::LeftEye,
        Self::RightEye,
        Self::LeftEar,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftHip,
        Self::RightHip,
    ];

    /// Position of this landmark within a frame.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Snake-case landmark name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEyeInner => "left_eye_inner",
            Self::LeftEye => "left_eye",
            Self::LeftEyeOuter => "left_eye_outer",
            Self::RightEyeInner => "right_eye_inner",
            Self::RightEye => "right_eye",
            Self::RightEyeOuter => "right_eye_outer",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::MouthLeft => "mouth_left",
            Self::MouthRight => "mouth_right",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftPinky => "left_pinky",
            Self::RightPinky => "right_pinky",
            Self::LeftIndex => "left_index",
            Self::RightIndex => "right_index",
            Self::LeftThumb => "left_thumb",
            Self::RightThumb => "right_thumb",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
            Self::LeftHeel => "left_heel",
            Self::RightHeel => "right_heel",
            Self::LeftFootIndex => "left_foot_index",
            Self::RightFootIndex => "right_foot_index",
        }
    }
}

/// A single tracked body point in normalized image coordinates.
///
/// Origin is the top-left corner; `x` grows rightwards and `y` downwards.
/// Values are usually within 0.0-1.0 but are never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized horizontal position.
    pub x: f64,
    /// Normalized vertical position.
    pub y: f64,
    /// Relative depth, if the detector reports one. Unused by scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Detector visibility estimate. Unused by scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl Landmark {
    /// Creates a 2D landmark.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            visibility: None,
        }
    }

    /// Whether both planar coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A validated snapshot of all 33 landmarks for one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkFrame {
    landmarks: Vec<Landmark>,
}

impl LandmarkFrame {
    /// Validates raw landmarks into a frame.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::LandmarkCount`] unless exactly
    /// [`LandmarkIndex::COUNT`] landmarks are given, and
    /// [`InvalidInputError::NonFiniteLandmark`] when a landmark the scorer
    /// reads has a NaN or infinite coordinate.
    pub fn new(landmarks: Vec<Landmark>) -> Result<Self, InvalidInputError> {
        if landmarks.len() != LandmarkIndex::COUNT {
            return Err(InvalidInputError::LandmarkCount {
                expected: LandmarkIndex::COUNT,
                found: landmarks.len(),
            });
        }

        if let Some(bad) = LandmarkIndex::SCORED
            .into_iter()
            .find(|idx| !landmarks[idx.index()].is_finite())
        {
            return Err(InvalidInputError::NonFiniteLandmark {
                index: bad.index(),
                name: bad.name(),
            });
        }

        Ok(Self { landmarks })
    }

    /// Returns the landmark at a given pose index.
    #[must_use]
    pub fn get(&self, index: LandmarkIndex) -> Landmark {
        self.landmarks[index.index()]
    }

    /// All landmarks in index order.
    #[must_use]
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }
}

impl TryFrom<Vec<Landmark>> for LandmarkFrame {
    type Error = InvalidInputError;

    fn try_from(landmarks: Vec<Landmark>) -> Result<Self, Self::Error> {
        Self::new(landmarks)
    }
}

impl TryFrom<&[Landmark]> for LandmarkFrame {
    type Error = InvalidInputError;

    fn try_from(landmarks: &[Landmark]) -> Result<Self, Self::Error> {
        Self::new(landmarks.to_vec())
    }
}

/// Raw, unvalidated frame as delivered by a [`crate::LandmarkSource`].
#[derive(Debug, Clone)]
pub struct FrameInput {
    /// Where the frame came from, e.g. `session.jsonl:12`.
    pub label: String,
    /// Capture time, if the source recorded one.
    pub timestamp: Option<OffsetDateTime>,
    /// Landmarks as reported by the detector.
    pub landmarks: Vec<Landmark>,
}

impl FrameInput {
    /// Creates a frame input without a capture time.
    #[must_use]
    pub fn new(label: impl Into<String>, landmarks: Vec<Landmark>) -> Self {
        Self {
            label: label.into(),
            timestamp: None,
            landmarks,
        }
    }
}
