//! Landmark source port for receiving pose frames.

use crate::domain::FrameInput;

/// Port for pulling landmark frames from a detector, recording or channel.
pub trait LandmarkSource: Send + Sync {
    /// Returns an iterator over frames from this source.
    ///
    /// # Errors
    ///
    /// Individual items may be errors if a frame fails to load or parse.
    fn frames(&self) -> Box<dyn Iterator<Item = anyhow::Result<FrameInput>> + Send + '_>;

    /// Returns the total number of frames, if known.
    fn count_hint(&self) -> Option<usize>;
}
