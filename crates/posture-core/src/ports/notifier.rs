//! Notifier port for low-score alerts.

use crate::PostureAlert;

/// Port for telling the user their posture has dropped.
pub trait Notifier: Send + Sync {
    /// Delivers an alert. Delivery failures are the adapter's concern.
    fn notify(&self, alert: &PostureAlert);
}
