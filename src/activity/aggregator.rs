//! Weekly/monthly rollup, active-day count and best streak over a daily history.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use serde::Serialize;

use super::record::DailyRecord;

/// Length of the trailing "week" window.
///
/// Eight days, compared strictly against elapsed wall-clock time from the
/// record's midnight to `now`.
pub const WEEK_WINDOW_DAYS: i64 = 8;

/// Best streak reported for an empty history.
pub const EMPTY_HISTORY_STREAK: u32 = 1;

/// Summary of an activity history relative to a reference instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Seconds recorded inside the trailing 8-day window.
    pub week: u64,
    /// Seconds recorded in the reference instant's calendar month.
    pub month: u64,
    /// Distinct dates present.
    pub days_active: usize,
    /// Longest run of calendar-consecutive dates.
    pub best_streak: u32,
}

/// Compute [`Stats`] for `records` as seen from `now`.
///
/// Records are not required to be sorted or unique. A record dated after
/// `now` has a negative age and therefore falls inside the week window.
/// Two records sharing a date both add to the sums, count once toward
/// `days_active`, and the second one restarts the running streak at 1.
#[must_use]
pub fn compute_stats(records: &[DailyRecord], now: NaiveDateTime) -> Stats {
    if records.is_empty() {
        return Stats {
            best_streak: EMPTY_HISTORY_STREAK,
            ..Stats::default()
        };
    }

    let mut sorted = records.to_vec();
    sorted.sort_by_key(|record| record.date);

    let week_window = TimeDelta::days(WEEK_WINDOW_DAYS);
    let mut week: u64 = 0;
    let mut month: u64 = 0;
    let mut seen: HashSet<NaiveDate> = HashSet::with_capacity(sorted.len());
    let mut streak: u32 = 0;
    let mut best_streak: u32 = 0;
    let mut previous: Option<NaiveDate> = None;

    for record in &sorted {
        if record.date.month() == now.month() && record.date.year() == now.year() {
            month = month.saturating_add(record.total_seconds);
        }

        if now.signed_duration_since(record.midnight()) < week_window {
            week = week.saturating_add(record.total_seconds);
        }

        seen.insert(record.date);

        streak = match previous {
            Some(prev) if record.date.signed_duration_since(prev).num_days() == 1 => {
                streak.saturating_add(1)
            }
            Some(_) => {
                best_streak = best_streak.max(streak);
                1
            }
            None => 1,
        };

        previous = Some(record.date);
    }

    best_streak = best_streak.max(streak);

    let stats = Stats {
        week,
        month,
        days_active: seen.len(),
        best_streak,
    };

    tracing::debug!(
        records = records.len(),
        week = stats.week,
        month = stats.month,
        days_active = stats.days_active,
        best_streak = stats.best_streak,
        "computed activity stats"
    );

    stats
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
