//! In-process frame channel.
//!
//! A capture thread holds a [`FrameSender`] and pushes frames as they are
//! detected; the scoring side reads them through [`ChannelLandmarkSource`].
//! The source drains until every sender is dropped.

use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::sync::{Mutex, PoisonError};

use anyhow::{anyhow, Result};
use posture_core::{FrameInput, LandmarkSource};
use tracing::trace;

/// Default number of frames buffered between producer and scorer.
pub const DEFAULT_CAPACITY: usize = 16;

/// Creates a bounded frame channel.
#[must_use]
pub fn frame_channel(capacity: usize) -> (FrameSender, ChannelLandmarkSource) {
    let (tx, rx) = mpsc::sync_channel(capacity);
    (
        FrameSender { tx },
        ChannelLandmarkSource {
            rx: Mutex::new(rx),
        },
    )
}

/// Producer half of a frame channel.
#[derive(Debug, Clone)]
pub struct FrameSender {
    tx: SyncSender<FrameInput>,
}

impl FrameSender {
    /// Sends a frame, blocking while the buffer is full.
    ///
    /// # Errors
    ///
    /// Returns an error if the receiving source has been dropped.
    pub fn send(&self, frame: FrameInput) -> Result<()> {
        self.tx
            .send(frame)
            .map_err(|e| anyhow!("Frame receiver closed, dropped {}", e.0.label))
    }

    /// Sends a frame without blocking.
    ///
    /// Returns `Ok(false)` when the buffer is full and the frame was dropped,
    /// which keeps a live capture loop from stalling behind the scorer.
    ///
    /// # Errors
    ///
    /// Returns an error if the receiving source has been dropped.
    pub fn try_send(&self, frame: FrameInput) -> Result<bool> {
        match self.tx.try_send(frame) {
            Ok(()) => Ok(true),
            Err(TrySendError::Full(frame)) => {
                trace!("Frame buffer full, dropping {}", frame.label);
                Ok(false)
            }
            Err(TrySendError::Disconnected(frame)) => {
                Err(anyhow!("Frame receiver closed, dropped {}", frame.label))
            }
        }
    }
}

/// Landmark source fed by a [`FrameSender`].
#[derive(Debug)]
pub struct ChannelLandmarkSource {
    rx: Mutex<Receiver<FrameInput>>,
}

impl LandmarkSource for ChannelLandmarkSource {
    fn frames(&self) -> Box<dyn Iterator<Item = Result<FrameInput>> + Send + '_> {
        Box::new(std::iter::from_fn(move || {
            self.rx
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .recv()
                .ok()
                .map(Ok)
        }))
    }

    fn count_hint(&self) -> Option<usize> {
        None
    }
}
