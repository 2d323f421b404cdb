//! Scoring session: drives frames from a source through the scorer.
//!
//! The source is the message boundary. Frames arrive from a file, a channel
//! fed by a capture thread, or a test double, and the session scores them one
//! at a time and fans each snapshot out to the configured sinks.

use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::alert::AlertPolicy;
use crate::domain::LandmarkFrame;
use crate::ports::{
    HistoryStore, LandmarkSource, Notifier, ProgressEvent, ProgressSink, SnapshotOutput,
};
use crate::scorer::PostureScorer;

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// Frames scored.
    pub processed: usize,
    /// Frames skipped because they failed to load or validate.
    pub skipped: usize,
    /// Scored frames with at least one issue.
    pub with_issues: usize,
    /// Alerts delivered to the notifier.
    pub alerts: usize,
}

/// Wires a scorer to its output and optional collaborators.
pub struct Session<'a> {
    scorer: &'a PostureScorer,
    output: &'a dyn SnapshotOutput,
    history: Option<&'a dyn HistoryStore>,
    notifier: Option<(&'a dyn Notifier, AlertPolicy)>,
    progress: Option<&'a dyn ProgressSink>,
}

impl<'a> Session<'a> {
    /// Creates a session that writes every snapshot to `output`.
    #[must_use]
    pub fn new(scorer: &'a PostureScorer, output: &'a dyn SnapshotOutput) -> Self {
        Self {
            scorer,
            output,
            history: None,
            notifier: None,
            progress: None,
        }
    }

    /// Appends every snapshot to a history store.
    #[must_use]
    pub fn with_history(mut self, history: &'a dyn HistoryStore) -> Self {
        self.history = Some(history);
        self
    }

    /// Sends low-score alerts to a notifier according to `policy`.
    #[must_use]
    pub fn with_notifier(mut self, notifier: &'a dyn Notifier, policy: AlertPolicy) -> Self {
        self.notifier = Some((notifier, policy));
        self
    }

    /// Reports progress events to a sink.
    #[must_use]
    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = Some(progress);
        self
    }

    fn emit(&self, event: ProgressEvent) {
        if let Some(progress) = self.progress {
            progress.on_event(event);
        }
    }

    /// Scores every frame the source yields.
    ///
    /// Frames that fail to load or validate are skipped. History failures are
    /// logged and do not stop the session.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the output fails.
    pub fn run(&mut self, source: &dyn LandmarkSource) -> anyhow::Result<SessionReport> {
        let total = source.count_hint();
        let mut report = SessionReport::default();

        for (index, item) in source.frames().enumerate() {
            let input = match item {
                Ok(input) => input,
                Err(e) => {
                    warn!("Skipping frame {index}: {e:#}");
                    self.emit(ProgressEvent::Skipped {
                        label: format!("frame {index}"),
                        reason: format!("{e:#}"),
                    });
                    report.skipped += 1;
                    continue;
                }
            };

            self.emit(ProgressEvent::Started {
                label: input.label.clone(),
                index,
                total,
            });

            let frame = match LandmarkFrame::new(input.landmarks) {
                Ok(frame) => frame,
                Err(e) => {
                    warn!("Skipping {}: {e}", input.label);
                    self.emit(ProgressEvent::Skipped {
                        label: input.label,
                        reason: e.to_string(),
                    });
                    report.skipped += 1;
                    continue;
                }
            };

            let timestamp = input.timestamp.unwrap_or_else(OffsetDateTime::now_utc);
            let mut snapshot = self.scorer.score_frame(&frame, timestamp);
            snapshot.source = Some(input.label);

            debug!(
                "{}: score {} ({}), {} issue(s)",
                snapshot.source.as_deref().unwrap_or_default(),
                snapshot.score,
                snapshot.status_label,
                snapshot.issues.len()
            );

            if snapshot.has_issues() {
                report.with_issues += 1;
            }

            if let Some(history) = self.history {
                if let Err(e) = history.append(&snapshot) {
                    warn!("Failed to record history: {e:#}");
                }
            }

            if let Some((notifier, policy)) = self.notifier.as_mut() {
                if let Some(alert) = policy.observe(&snapshot) {
                    info!(
                        "Posture score {} dropped below {}",
                        alert.score, alert.threshold
                    );
                    notifier.notify(&alert);
                    report.alerts += 1;
                }
            }

            self.output.write(&snapshot)?;
            self.emit(ProgressEvent::Scored { snapshot });
            report.processed += 1;
        }

        self.output.flush()?;

        self.emit(ProgressEvent::Finished {
            processed: report.processed,
            skipped: report.skipped,
        });

        info!(
            "Session finished: {} scored, {} skipped, {} with issues",
            report.processed, report.skipped, report.with_issues
        );

        Ok(report)
    }
}
