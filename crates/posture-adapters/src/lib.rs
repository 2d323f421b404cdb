//! Posture Adapters - External adapters for posture-core.
//!
//! This crate provides adapters for:
//! - Filesystem landmark source (JSON and JSON Lines recordings)
//! - In-process frame channel for live capture
//! - Bounded history stores

pub mod channel;
pub mod fs;
pub mod history;

pub use channel::{frame_channel, ChannelLandmarkSource, FrameSender};
pub use fs::FsLandmarkSource;
pub use history::{JsonFileHistory, MemoryHistory};
