use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn new_history_is_empty() {
    let history = ActivityHistory::new();
    assert!(history.is_empty());
    assert_eq!(history.len(), 0);
    assert_eq!(history.version(), 1);
}

#[test]
fn from_records_merges_and_sorts() {
    let history = ActivityHistory::from_records([
        DailyRecord::new(date(2024, 1, 3), 30),
        DailyRecord::new(date(2024, 1, 1), 10),
        DailyRecord::new(date(2024, 1, 3), 5),
    ]);

    assert_eq!(
        history.records(),
        &[
            DailyRecord::new(date(2024, 1, 1), 10),
            DailyRecord::new(date(2024, 1, 3), 35),
        ]
    );
}

// =============================================================================
// Recording
// =============================================================================

#[test]
fn add_seconds_creates_entry() {
    let mut history = ActivityHistory::new();
    let total = history.add_seconds(date(2024, 6, 1), 600);

    assert_eq!(total, 600);
    assert_eq!(history.total_for(date(2024, 6, 1)), 600);
}

#[test]
fn add_seconds_accumulates_same_day() {
    let mut history = ActivityHistory::new();
    history.add_seconds(date(2024, 6, 1), 600);
    let total = history.add_seconds(date(2024, 6, 1), 300);

    assert_eq!(total, 900);
    assert_eq!(history.len(), 1);
}

#[test]
fn add_seconds_keeps_entries_sorted() {
    let mut history = ActivityHistory::new();
    history.add_seconds(date(2024, 6, 3), 1);
    history.add_seconds(date(2024, 6, 1), 1);
    history.add_seconds(date(2024, 6, 2), 1);

    let dates: Vec<_> = history.records().iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![date(2024, 6, 1), date(2024, 6, 2), date(2024, 6, 3)]);
}

#[test]
fn total_for_missing_date_is_zero() {
    let history = ActivityHistory::new();
    assert_eq!(history.total_for(date(2024, 6, 1)), 0);
}

// =============================================================================
// Retention
// =============================================================================

#[test]
fn retention_removes_entries_older_than_max_age() {
    let mut history = ActivityHistory::new();
    history.add_seconds(date(2024, 1, 1), 1);
    history.add_seconds(date(2024, 5, 25), 1);
    history.add_seconds(date(2024, 6, 1), 1);

    let removed = history.apply_retention(7, date(2024, 6, 1));

    assert_eq!(removed, 1);
    assert_eq!(history.records()[0].date, date(2024, 5, 25));
}

#[test]
fn retention_cutoff_is_max_age_before_today() {
    assert_eq!(
        ActivityHistory::retention_cutoff(30, date(2024, 6, 1)),
        date(2024, 5, 2)
    );
    assert_eq!(
        ActivityHistory::retention_cutoff(0, date(2024, 6, 1)),
        date(2024, 6, 1)
    );
}

#[test]
fn retention_keeps_everything_within_window() {
    let mut history = ActivityHistory::new();
    history.add_seconds(date(2024, 6, 1), 1);

    assert_eq!(history.apply_retention(30, date(2024, 6, 1)), 0);
    assert_eq!(history.len(), 1);
}

// =============================================================================
// Stats
// =============================================================================

#[test]
fn stats_delegates_to_aggregator() {
    let mut history = ActivityHistory::new();
    history.add_seconds(date(2024, 6, 1), 100);
    history.add_seconds(date(2024, 6, 2), 200);

    let now = date(2024, 6, 2).and_hms_opt(12, 0, 0).unwrap();
    let stats = history.stats(now);

    assert_eq!(stats.week, 300);
    assert_eq!(stats.month, 300);
    assert_eq!(stats.days_active, 2);
    assert_eq!(stats.best_streak, 2);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/history.json");

    let mut history = ActivityHistory::new();
    history.add_seconds(date(2024, 6, 1), 100);
    history.save(&path).unwrap();

    let loaded = ActivityHistory::load(&path).unwrap();
    assert_eq!(loaded, history);
}

#[test]
fn saved_file_uses_versioned_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");

    let mut history = ActivityHistory::new();
    history.add_seconds(date(2024, 6, 1), 100);
    history.save(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"version\": 1"));
    assert!(content.contains("\"date\": \"2024-06-01\""));
    assert!(content.contains("\"total\": 100"));
}

#[test]
fn load_accepts_bare_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("export.json");
    fs::write(
        &path,
        r#"[{"date":"2024-06-01","total":5},{"date":"2024-06-01","total":7}]"#,
    )
    .unwrap();

    let history = ActivityHistory::load(&path).unwrap();
    assert_eq!(history.total_for(date(2024, 6, 1)), 12);
}

#[test]
fn load_missing_file_is_file_access_error() {
    let dir = TempDir::new().unwrap();
    let err = ActivityHistory::load(&dir.path().join("missing.json")).unwrap_err();
    assert_eq!(err.error_type(), "FileAccess");
}

#[test]
fn load_or_default_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let history = ActivityHistory::load_or_default(&dir.path().join("missing.json"));
    assert!(history.is_empty());
}

#[test]
fn load_or_default_corrupt_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    fs::write(&path, "not json").unwrap();

    let history = ActivityHistory::load_or_default(&path);
    assert!(history.is_empty());
}
