use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

const SECONDS_PER_MINUTE: u64 = 60;

/// Root configuration, read from `.activity-stats.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config schema version. `None` means the current version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub goal: GoalConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the activity history lives and how long it is kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryConfig {
    /// History file path. Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Drop entries older than this many days when recording.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age_days: Option<u32>,
}

/// Daily activity goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_minutes: Option<u32>,
}

impl GoalConfig {
    /// The daily goal in seconds, if configured.
    #[must_use]
    pub fn daily_seconds(&self) -> Option<u64> {
        self.daily_minutes
            .map(|minutes| u64::from(minutes) * SECONDS_PER_MINUTE)
    }
}

/// Output defaults, overridable per command with `--format`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
