//! Analytics period selection.
//!
//! The period is display state held by the caller. It labels the analytics
//! view and does not narrow the task set handed to
//! [`compute_statistics`](crate::stats::compute_statistics).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Period shown in the analytics header.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsPeriod {
    /// This week.
    Week,
    /// This month.
    #[default]
    Month,
    /// This year.
    Year,
}

impl StatsPeriod {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Week => "This week",
            Self::Month => "This month",
            Self::Year => "This year",
        }
    }
}

impl std::fmt::Display for StatsPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_month() {
        assert_eq!(StatsPeriod::default(), StatsPeriod::Month);
    }

    #[test]
    fn test_serde_lowercase() {
        let period: StatsPeriod = serde_yaml::from_str("week").unwrap();
        assert_eq!(period, StatsPeriod::Week);
        assert_eq!(serde_json::to_string(&StatsPeriod::Year).unwrap(), "\"year\"");
    }
}
