//! Aggregate statistics over a posture history.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use time::{Duration, OffsetDateTime, Time, UtcOffset};

use crate::domain::ScoredSnapshot;

/// Scores at or above this count towards consistency.
const GOOD_SCORE: u8 = 60;
/// Size of each window compared by `improvement`.
const TREND_WINDOW: usize = 10;
/// Both windows need at least this many records for a trend.
const TREND_MIN_RECORDS: usize = 5;

/// Statistics over a set of scored snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub total_records: usize,
    pub average_score: f64,
    pub max_score: u8,
    pub min_score: u8,
    /// Records scoring 90 or more.
    pub perfect_count: usize,
    /// Records scoring 60 or more, perfect ones included.
    pub good_count: usize,
    /// Records scoring 50 to 59.
    pub normal_count: usize,
    /// Records scoring below 50.
    pub bad_count: usize,
    /// Mean of the latest ten scores minus the mean of the ten before them.
    /// Zero unless both windows hold at least five records.
    pub improvement: f64,
    /// Percentage of records scoring 60 or more.
    pub consistency: f64,
}

impl HistorySummary {
    /// Summarizes snapshots given oldest first. Returns `None` when empty.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_snapshots(snapshots: &[ScoredSnapshot]) -> Option<Self> {
        let scores: Vec<u8> = snapshots.iter().map(|s| s.score).collect();
        let max_score = *scores.iter().max()?;
        let min_score = *scores.iter().min()?;
        let total = scores.len();

        let count = |pred: fn(u8) -> bool| scores.iter().filter(|&&s| pred(s)).count();
        let good_count = count(|s| s >= GOOD_SCORE);

        Some(Self {
            total_records: total,
            average_score: mean(&scores),
            max_score,
            min_score,
            perfect_count: count(|s| s >= 90),
            good_count,
            normal_count: count(|s| (50..60).contains(&s)),
            bad_count: count(|s| s < 50),
            improvement: improvement(&scores),
            consistency: good_count as f64 / total as f64 * 100.0,
        })
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(scores: &[u8]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64
}

fn improvement(scores: &[u8]) -> f64 {
    let recent_start = scores.len().saturating_sub(TREND_WINDOW);
    let previous_start = recent_start.saturating_sub(TREND_WINDOW);
    let recent = &scores[recent_start..];
    let previous = &scores[previous_start..recent_start];

    if recent.len() >= TREND_MIN_RECORDS && previous.len() >= TREND_MIN_RECORDS {
        mean(recent) - mean(previous)
    } else {
        0.0
    }
}

/// Time window for selecting history records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFilter {
    /// Every record.
    #[default]
    All,
    /// Since midnight UTC of the reference day.
    Today,
    /// The last 7 days.
    Week,
    /// The last 30 days.
    Month,
}

impl TimeFilter {
    /// Earliest timestamp kept, relative to `now`. `None` keeps everything.
    #[must_use]
    pub fn cutoff(self, now: OffsetDateTime) -> Option<OffsetDateTime> {
        match self {
            Self::All => None,
            Self::Today => Some(now.to_offset(UtcOffset::UTC).replace_time(Time::MIDNIGHT)),
            Self::Week => Some(now - Duration::days(7)),
            Self::Month => Some(now - Duration::days(30)),
        }
    }

    /// Keeps snapshots at or after the cutoff, preserving order.
    #[must_use]
    pub fn apply(self, snapshots: &[ScoredSnapshot], now: OffsetDateTime) -> Vec<ScoredSnapshot> {
        match self.cutoff(now) {
            None => snapshots.to_vec(),
            Some(cutoff) => snapshots
                .iter()
                .filter(|s| s.timestamp >= cutoff)
                .cloned()
                .collect(),
        }
    }
}

impl FromStr for TimeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(format!(
                "'{other}' is not one of: all, today, week, month"
            )),
        }
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        })
    }
}
