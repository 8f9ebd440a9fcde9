use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::Serialize;

use super::aggregator::{Stats, compute_stats};
use super::record::{DailyRecord, parse_records_json};
use crate::state::atomic_write;
use crate::{ActivityStatsError, Result};

const HISTORY_VERSION: u32 = 1;

/// Persisted daily activity totals, one entry per date, sorted by date.
///
/// File format:
/// ```json
/// {
///   "version": 1,
///   "entries": [
///     { "date": "2024-01-05", "total": 1800 }
///   ]
/// }
/// ```
///
/// A bare array of records (the upstream export shape) is accepted on load.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActivityHistory {
    version: u32,
    entries: Vec<DailyRecord>,
}

impl Default for ActivityHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            version: HISTORY_VERSION,
            entries: Vec::new(),
        }
    }

    /// Build a history from arbitrary records, merging same-date entries.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = DailyRecord>) -> Self {
        let mut history = Self::new();
        for record in records {
            history.add_seconds(record.date, record.total_seconds);
        }
        history
    }

    /// Load history from a JSON file.
    ///
    /// Duplicate dates in the file are merged.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ActivityStatsError::FileAccess {
            path: path.to_path_buf(),
            source: e,
        })?;
        let records = parse_records_json(&content)?;
        tracing::debug!(path = %path.display(), entries = records.len(), "loaded activity history");
        Ok(Self::from_records(records))
    }

    /// Load history if the file exists, otherwise return an empty history.
    ///
    /// A file that exists but cannot be parsed is logged and treated as empty.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no activity history yet");
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable activity history");
            Self::default()
        })
    }

    /// Save history to a JSON file (temp file + rename).
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        atomic_write(path, json.as_bytes()).map_err(|e| ActivityStatsError::FileAccess {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::info!(path = %path.display(), entries = self.entries.len(), "saved activity history");
        Ok(())
    }

    /// Add tracked seconds to `date`, creating the entry if needed.
    ///
    /// Returns the new total for that date.
    pub fn add_seconds(&mut self, date: NaiveDate, seconds: u64) -> u64 {
        match self.entries.binary_search_by_key(&date, |entry| entry.date) {
            Ok(index) => {
                let entry = &mut self.entries[index];
                entry.total_seconds = entry.total_seconds.saturating_add(seconds);
                entry.total_seconds
            }
            Err(index) => {
                self.entries.insert(index, DailyRecord::new(date, seconds));
                seconds
            }
        }
    }

    /// Total recorded for `date`, zero if absent.
    #[must_use]
    pub fn total_for(&self, date: NaiveDate) -> u64 {
        self.entries
            .binary_search_by_key(&date, |entry| entry.date)
            .map_or(0, |index| self.entries[index].total_seconds)
    }

    /// Oldest date kept by [`apply_retention`](Self::apply_retention).
    #[must_use]
    pub fn retention_cutoff(max_age_days: u32, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_signed(TimeDelta::days(i64::from(max_age_days)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Remove entries dated more than `max_age_days` before `today`.
    ///
    /// Returns the number of entries removed.
    pub fn apply_retention(&mut self, max_age_days: u32, today: NaiveDate) -> usize {
        let original_count = self.entries.len();
        let cutoff = Self::retention_cutoff(max_age_days, today);
        self.entries.retain(|entry| entry.date >= cutoff);

        let removed = original_count - self.entries.len();
        if removed > 0 {
            tracing::info!(removed, %cutoff, "applied history retention");
        }
        removed
    }

    /// Compute [`Stats`] over the whole history.
    #[must_use]
    pub fn stats(&self, now: NaiveDateTime) -> Stats {
        compute_stats(&self.entries, now)
    }

    /// Entries sorted by date, oldest first.
    #[must_use]
    pub fn records(&self) -> &[DailyRecord] {
        &self.entries
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
