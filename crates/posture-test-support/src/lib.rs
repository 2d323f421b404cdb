//! Test support utilities for posture scoring.
//!
//! Provides mocks for every core port and synthetic landmark frame builders
//! with known scores.
//!
//! # Example
//!
//! ```
//! use posture_test_support::{MockLandmarkSource, SyntheticFrameBuilder};
//!
//! // Create synthetic test frames
//! let good = SyntheticFrameBuilder::neutral().input("good");
//! let poor = SyntheticFrameBuilder::slouched().input("poor");
//!
//! // Create mock landmark source
//! let source = MockLandmarkSource::new(vec![good, poor]);
//! ```

mod builders;
mod mocks;

pub use builders::SyntheticFrameBuilder;
pub use mocks::{
    MockHistoryStore, MockLandmarkSource, MockNotifier, MockProgressSink, MockSnapshotOutput,
};
