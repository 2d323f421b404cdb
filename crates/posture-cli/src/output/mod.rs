//! Output formatting for CLI.

mod json;
mod notify;
mod progress;

pub use json::JsonOutput;
pub use notify::StderrNotifier;
pub use progress::ProgressBar;
