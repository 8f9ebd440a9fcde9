mod error_output;
mod json;
mod text;

pub use error_output::{print_error, write_error};
pub use json::JsonFormatter;
pub use text::TextFormatter;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::activity::{GoalProgress, Stats};
use crate::error::Result;

/// Everything a summary shows: the stats, the instant they were computed
/// for, and optional daily goal progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub now: NaiveDateTime,
    pub stats: Stats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<GoalProgress>,
}

impl StatsReport {
    #[must_use]
    pub const fn new(now: NaiveDateTime, stats: Stats) -> Self {
        Self {
            now,
            stats,
            goal: None,
        }
    }

    #[must_use]
    pub const fn with_goal(mut self, goal: Option<GoalProgress>) -> Self {
        self.goal = goal;
        self
    }
}

/// Trait for formatting a stats report into various output formats.
pub trait StatsFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &StatsReport) -> Result<String>;
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Format `report` with the formatter for this output format.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn format_report(self, report: &StatsReport) -> Result<String> {
        match self {
            Self::Text => TextFormatter.format(report),
            Self::Json => JsonFormatter.format(report),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
