//! Alert notifier writing to stderr.

use posture_core::{Notifier, PostureAlert};

/// Prints low-score alerts to stderr.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl StderrNotifier {
    /// Creates a new stderr notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// One-line alert text followed by one line per issue.
pub fn format_alert(alert: &PostureAlert) -> String {
    let mut text = format!(
        "ALERT: posture score {} ({}) dropped below {}",
        alert.score, alert.status, alert.threshold
    );
    for issue in &alert.issues {
        text.push_str(&format!("\n  - {}: {}", issue.problem, issue.solution));
    }
    text
}

impl Notifier for StderrNotifier {
    fn notify(&self, alert: &PostureAlert) {
        eprintln!("{}", format_alert(alert));
    }
}
