//! Mock implementations of core port traits.

use std::sync::{Arc, Mutex, PoisonError};

use posture_core::{
    FrameInput, HistoryStore, LandmarkSource, Notifier, PostureAlert, ProgressEvent,
    ProgressSink, ScoredSnapshot, SnapshotOutput,
};

/// Mock implementation of `LandmarkSource` for testing.
///
/// Yields pre-built frames, or load errors, and tracks iteration.
pub struct MockLandmarkSource {
    items: Vec<Result<FrameInput, String>>,
    iteration_count: Arc<Mutex<usize>>,
}

impl MockLandmarkSource {
    /// Creates a new mock source with the given frames.
    #[must_use]
    pub fn new(frames: Vec<FrameInput>) -> Self {
        Self::with_items(frames.into_iter().map(Ok).collect())
    }

    /// Creates a source whose items may be load errors.
    #[must_use]
    pub fn with_items(items: Vec<Result<FrameInput, String>>) -> Self {
        Self {
            items,
            iteration_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Creates an empty mock source.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns the number of times the source has been iterated.
    #[must_use]
    pub fn iteration_count(&self) -> usize {
        *self
            .iteration_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl LandmarkSource for MockLandmarkSource {
    fn frames(&self) -> Box<dyn Iterator<Item = anyhow::Result<FrameInput>> + Send + '_> {
        if let Ok(mut c) = self.iteration_count.lock() {
            *c += 1;
        }
        Box::new(
            self.items
                .iter()
                .map(|item| item.clone().map_err(anyhow::Error::msg)),
        )
    }

    fn count_hint(&self) -> Option<usize> {
        Some(self.items.len())
    }
}

/// Mock implementation of `SnapshotOutput` for testing.
///
/// Captures snapshots for later assertions.
pub struct MockSnapshotOutput {
    snapshots: Arc<Mutex<Vec<ScoredSnapshot>>>,
    flush_count: Arc<Mutex<usize>>,
}

impl MockSnapshotOutput {
    /// Creates a new mock output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshots: Arc::new(Mutex::new(Vec::new())),
            flush_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Returns all captured snapshots.
    #[must_use]
    pub fn snapshots(&self) -> Vec<ScoredSnapshot> {
        self.snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the captured scores in write order.
    #[must_use]
    pub fn scores(&self) -> Vec<u8> {
        self.snapshots().iter().map(|s| s.score).collect()
    }

    /// Returns the number of times `flush()` was called.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        *self
            .flush_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockSnapshotOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotOutput for MockSnapshotOutput {
    fn write(&self, snapshot: &ScoredSnapshot) -> anyhow::Result<()> {
        self.snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot.clone());
        Ok(())
    }

    fn flush(&self) -> anyhow::Result<()> {
        if let Ok(mut c) = self.flush_count.lock() {
            *c += 1;
        }
        Ok(())
    }
}

/// Mock implementation of `HistoryStore` for testing.
///
/// Unbounded. A failing store rejects every append.
pub struct MockHistoryStore {
    snapshots: Arc<Mutex<Vec<ScoredSnapshot>>>,
    failing: bool,
}

impl MockHistoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshots: Arc::new(Mutex::new(Vec::new())),
            failing: false,
        }
    }

    /// Creates a store whose appends always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    /// Returns the number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MockHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore for MockHistoryStore {
    fn append(&self, snapshot: &ScoredSnapshot) -> anyhow::Result<()> {
        if self.failing {
            anyhow::bail!("history store unavailable");
        }
        self.snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot.clone());
        Ok(())
    }

    fn snapshots(&self) -> anyhow::Result<Vec<ScoredSnapshot>> {
        Ok(self
            .snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn clear(&self) -> anyhow::Result<()> {
        self.snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        Ok(())
    }
}

/// Mock implementation of `Notifier` for testing.
///
/// Captures alerts for later assertions.
pub struct MockNotifier {
    alerts: Arc<Mutex<Vec<PostureAlert>>>,
}

impl MockNotifier {
    /// Creates a new mock notifier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alerts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all captured alerts.
    #[must_use]
    pub fn alerts(&self) -> Vec<PostureAlert> {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, alert: &PostureAlert) {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(alert.clone());
    }
}

/// Mock implementation of `ProgressSink` for testing.
///
/// Captures events for later assertions.
pub struct MockProgressSink {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressSink {
    /// Creates a new mock progress sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all captured events.
    #[must_use]
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of `Started` events.
    #[must_use]
    pub fn started_count(&self) -> usize {
        self.count(|e| matches!(e, ProgressEvent::Started { .. }))
    }

    /// Returns the number of `Scored` events.
    #[must_use]
    pub fn scored_count(&self) -> usize {
        self.count(|e| matches!(e, ProgressEvent::Scored { .. }))
    }

    /// Returns the number of `Skipped` events.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.count(|e| matches!(e, ProgressEvent::Skipped { .. }))
    }

    /// Returns the final counts from the `Finished` event, if any.
    #[must_use]
    pub fn finished_counts(&self) -> Option<(usize, usize)> {
        self.events().iter().find_map(|e| match e {
            ProgressEvent::Finished { processed, skipped } => Some((*processed, *skipped)),
            _ => None,
        })
    }

    fn count(&self, pred: fn(&ProgressEvent) -> bool) -> usize {
        self.events().iter().filter(|e| pred(e)).count()
    }
}

impl Default for MockProgressSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for MockProgressSink {
    fn on_event(&self, event: ProgressEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
