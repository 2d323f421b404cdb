//! JSON output adapter.

use anyhow::Result;
use posture_core::{MetricsDisplay, ScoredSnapshot, SnapshotOutput};
use serde::Serialize;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Snapshot as written, optionally with rounded metrics alongside.
#[derive(Serialize)]
struct Record<'a> {
    #[serde(flatten)]
    snapshot: &'a ScoredSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<MetricsDisplay>,
}

/// JSON output adapter.
///
/// In lines mode every snapshot is written as soon as it arrives. In array
/// mode snapshots are buffered and written as one array on `flush`.
pub struct JsonOutput {
    writer: Mutex<Box<dyn Write + Send>>,
    pending: Mutex<Option<Vec<ScoredSnapshot>>>,
    pretty: bool,
    display: bool,
}

impl JsonOutput {
    /// Creates a new JSON output writing to stdout.
    #[must_use]
    pub fn stdout(array: bool, pretty: bool) -> Self {
        Self::new(Box::new(io::stdout()), array, pretty)
    }

    /// Creates a new JSON output writing to the given writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>, array: bool, pretty: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            pending: Mutex::new(array.then(Vec::new)),
            pretty,
            display: false,
        }
    }

    /// Adds a `display` object with one-decimal metrics to every record.
    #[must_use]
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    fn record<'a>(&self, snapshot: &'a ScoredSnapshot) -> Record<'a> {
        Record {
            snapshot,
            display: self.display.then(|| snapshot.metrics.display()),
        }
    }

    #[allow(clippy::significant_drop_tightening)]
    fn write_line(&self, json: &str) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writeln!(writer, "{json}")?;
        Ok(())
    }
}

impl SnapshotOutput for JsonOutput {
    fn write(&self, snapshot: &ScoredSnapshot) -> Result<()> {
        {
            let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(buffer) = pending.as_mut() {
                buffer.push(snapshot.clone());
                return Ok(());
            }
        }
        self.write_line(&serde_json::to_string(&self.record(snapshot))?)
    }

    #[allow(clippy::significant_drop_tightening)]
    fn flush(&self) -> Result<()> {
        let batch = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(snapshots) = batch {
            let records: Vec<Record<'_>> = snapshots.iter().map(|s| self.record(s)).collect();
            let json = if self.pretty {
                serde_json::to_string_pretty(&records)?
            } else {
                serde_json::to_string(&records)?
            };
            self.write_line(&json)?;
        }

        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writer.flush()?;
        Ok(())
    }
}
