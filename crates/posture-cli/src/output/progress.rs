//! Progress bar adapter using indicatif.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};
use posture_core::{ProgressEvent, ProgressSink, ScoredSnapshot};

/// Progress bar adapter for CLI output.
pub struct ProgressBar {
    bar: Option<IndicatifBar>,
    quiet: bool,
}

impl ProgressBar {
    /// Creates a new progress bar.
    ///
    /// # Arguments
    ///
    /// * `total` - Total number of frames, if known
    /// * `quiet` - If true, suppress all output
    /// * `show_bar` - If true, show progress bar; otherwise show per-frame status
    #[must_use]
    pub fn new(total: Option<u64>, quiet: bool, show_bar: bool) -> Self {
        if quiet {
            return Self {
                bar: None,
                quiet: true,
            };
        }

        let bar = if show_bar {
            let bar = total.map_or_else(IndicatifBar::new_spinner, IndicatifBar::new);

            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] {pos} frames {msg}")
            {
                bar.set_style(style);
            }

            Some(bar)
        } else {
            None
        };

        Self { bar, quiet }
    }
}

/// One-line frame summary with rounded headline metrics.
fn frame_line(snapshot: &ScoredSnapshot) -> String {
    let display = snapshot.metrics.display();
    format!(
        "{}: score {} ({}), {} issue(s); neck {}°, head forward {}%",
        snapshot.source.as_deref().unwrap_or("frame"),
        snapshot.score,
        snapshot.status_label,
        snapshot.issues.len(),
        display.neck_angle,
        display.head_forward_pct
    )
}

impl ProgressSink for ProgressBar {
    fn on_event(&self, event: ProgressEvent) {
        if self.quiet {
            return;
        }

        match event {
            ProgressEvent::Started { label, total, .. } => {
                if let Some(bar) = &self.bar {
                    if let Some(t) = total {
                        bar.set_length(t as u64);
                    }
                    bar.set_message(label);
                }
            }
            ProgressEvent::Scored { snapshot } => {
                if let Some(bar) = &self.bar {
                    bar.inc(1);
                } else if snapshot.has_issues() {
                    eprintln!("{}", frame_line(&snapshot));
                }
            }
            ProgressEvent::Skipped { label, reason } => {
                if let Some(bar) = &self.bar {
                    bar.inc(1);
                }
                eprintln!("WARN: Skipping {label}: {reason}");
            }
            ProgressEvent::Finished { processed, skipped } => {
                if let Some(bar) = &self.bar {
                    bar.finish_with_message(format!(
                        "Done: {processed} scored, {skipped} skipped"
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use posture_core::PostureScorer;
    use posture_test_support::SyntheticFrameBuilder;
    use time::macros::datetime;

    #[test]
    fn test_frame_line_shows_rounded_metrics() {
        let mut snapshot = PostureScorer::default()
            .score_landmarks(
                &SyntheticFrameBuilder::upright().build(),
                datetime!(2024-01-02 03:04:05 UTC),
            )
            .unwrap();
        snapshot.source = Some("up.jsonl:1".to_string());

        let line = frame_line(&snapshot);
        assert!(line.starts_with("up.jsonl:1: score 77 (good), 3 issue(s)"));
        assert!(line.ends_with("neck -90°, head forward 0%"));
    }
}
