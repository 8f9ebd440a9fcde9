use chrono::NaiveDate;
use serde::Serialize;

use super::record::DailyRecord;

/// Progress toward the daily activity goal for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal_seconds: u64,
    pub today_seconds: u64,
    pub remaining_seconds: u64,
    /// Completion percentage, capped at 100.
    pub percent: f64,
    pub met: bool,
}

impl GoalProgress {
    /// Sum every record dated `today` and compare it to `goal_seconds`.
    ///
    /// A zero goal is always met.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Display-only percentage
    pub fn compute(records: &[DailyRecord], today: NaiveDate, goal_seconds: u64) -> Self {
        let today_seconds = records
            .iter()
            .filter(|record| record.date == today)
            .fold(0u64, |acc, record| acc.saturating_add(record.total_seconds));

        let percent = if goal_seconds == 0 {
            100.0
        } else {
            (today_seconds as f64 / goal_seconds as f64 * 100.0).min(100.0)
        };

        Self {
            goal_seconds,
            today_seconds,
            remaining_seconds: goal_seconds.saturating_sub(today_seconds),
            percent,
            met: today_seconds >= goal_seconds,
        }
    }
}
