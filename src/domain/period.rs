use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Lookback window used to select expenses for a payout report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Month,
    /// Approximated as the last 365 days, not the full history.
    All,
}

impl Period {
    pub const ALL: [Period; 4] = [Period::Day, Period::Week, Period::Month, Period::All];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::All => "all",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "day" => Some(Period::Day),
            "week" => Some(Period::Week),
            "month" => Some(Period::Month),
            "all" => Some(Period::All),
            _ => None,
        }
    }

    /// Resolve a command name such as `payout_week` (without the leading slash).
    pub fn from_command(command: &str) -> Option<Self> {
        command
            .to_lowercase()
            .strip_prefix("payout_")
            .and_then(Self::from_str)
    }

    /// Command name that selects this period, without the leading slash.
    pub fn command(&self) -> String {
        format!("payout_{}", self.as_str())
    }

    pub fn lookback_days(&self) -> i64 {
        match self {
            Period::Day => 1,
            Period::Week => 7,
            Period::Month => 30,
            Period::All => 365,
        }
    }

    /// Earliest timestamp included in the window ending at `now`.
    pub fn since(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.lookback_days())
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
