//! Categorical posture status derived from the score.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status label for a posture score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostureStatus {
    /// Score 90 and above.
    Perfect,
    /// Score 60 to 89.
    Good,
    /// Score 50 to 59.
    Normal,
    /// Score below 50.
    Bad,
}

impl PostureStatus {
    /// Maps a score onto its status. Breakpoints are checked top-down.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= 90 {
            Self::Perfect
        } else if score >= 60 {
            Self::Good
        } else if score >= 50 {
            Self::Normal
        } else {
            Self::Bad
        }
    }

    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Good => "good",
            Self::Normal => "normal",
            Self::Bad => "bad",
        }
    }
}

impl fmt::Display for PostureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints_are_exact() {
        assert_eq!(PostureStatus::from_score(100), PostureStatus::Perfect);
        assert_eq!(PostureStatus::from_score(90), PostureStatus::Perfect);
        assert_eq!(PostureStatus::from_score(89), PostureStatus::Good);
        assert_eq!(PostureStatus::from_score(60), PostureStatus::Good);
        assert_eq!(PostureStatus::from_score(59), PostureStatus::Normal);
        assert_eq!(PostureStatus::from_score(50), PostureStatus::Normal);
        assert_eq!(PostureStatus::from_score(49), PostureStatus::Bad);
        assert_eq!(PostureStatus::from_score(0), PostureStatus::Bad);
    }

    #[test]
    fn test_display() {
        assert_eq!(PostureStatus::Normal.to_string(), "normal");
    }
}
