//! Errors raised when a landmark frame cannot be scored.

use thiserror::Error;

/// The landmark input is malformed and the frame must be skipped.
///
/// Never retried: the caller drops the frame and moves on to the next one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// The frame does not hold exactly one entry per pose landmark.
    #[error("invalid input: expected {expected} landmarks, found {found}")]
    LandmarkCount {
        /// Required landmark count.
        expected: usize,
        /// Landmarks actually present.
        found: usize,
    },
    /// A landmark the scorer reads has a NaN or infinite coordinate.
    #[error("invalid input: landmark {index} ({name}) has a non-finite coordinate")]
    NonFiniteLandmark {
        /// Landmark index in the pose convention.
        index: usize,
        /// Human-readable landmark name.
        name: &'static str,
    },
}
