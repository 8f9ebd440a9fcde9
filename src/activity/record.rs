use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ActivityStatsError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// One calendar day's aggregated activity duration.
///
/// Serialized form:
/// ```json
/// { "date": "2024-01-05", "total": 1800 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct DailyRecord {
    pub date: NaiveDate,
    #[serde(rename = "total")]
    pub total_seconds: u64,
}

impl DailyRecord {
    #[must_use]
    pub const fn new(date: NaiveDate, total_seconds: u64) -> Self {
        Self {
            date,
            total_seconds,
        }
    }

    /// The record's date as a wall-clock instant at midnight.
    #[must_use]
    pub fn midnight(&self) -> NaiveDateTime {
        self.date.and_time(NaiveTime::MIN)
    }
}

/// Upstream record shape before sanitizing.
#[derive(Debug, Deserialize)]
struct RawRecord {
    date: String,
    #[serde(default, alias = "total_seconds")]
    total: Value,
}

impl TryFrom<RawRecord> for DailyRecord {
    type Error = String;

    fn try_from(raw: RawRecord) -> std::result::Result<Self, Self::Error> {
        let date = parse_date(&raw.date).map_err(|e| e.message())?;
        Ok(Self::new(date, sanitize_total(&raw.total)))
    }
}

/// Coerce an upstream `total` into whole non-negative seconds.
///
/// Missing, null, negative, non-finite and non-numeric values count as zero.
/// Fractional seconds are truncated.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sanitize_total(total: &Value) -> u64 {
    let Value::Number(number) = total else {
        return 0;
    };

    if let Some(secs) = number.as_u64() {
        return secs;
    }
    if number.is_i64() {
        return 0;
    }
    match number.as_f64() {
        // `as` saturates at u64::MAX for huge values
        Some(secs) if secs.is_finite() && secs > 0.0 => secs.trunc() as u64,
        _ => 0,
    }
}

/// Parse a record date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 date-times (truncated to the date as written,
/// no timezone conversion), and naive `YYYY-MM-DDTHH:MM:SS[.fff]`.
///
/// # Errors
/// Returns `InvalidDate` if none of the formats match.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Ok(datetime.date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, NAIVE_DATETIME_FORMAT) {
        return Ok(datetime.date());
    }
    Err(ActivityStatsError::InvalidDate(format!(
        "unparseable date '{input}' (expected YYYY-MM-DD or an ISO-8601 date-time)"
    )))
}

/// Parse a reference instant for stats computation.
///
/// A bare date means midnight of that date. RFC 3339 input keeps its
/// wall-clock time and drops the offset.
///
/// # Errors
/// Returns `InvalidDate` if the input is not a recognizable date or date-time.
pub fn parse_instant(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Ok(datetime.naive_local());
    }
    NaiveDateTime::parse_from_str(input, NAIVE_DATETIME_FORMAT).map_err(|_| {
        ActivityStatsError::InvalidDate(format!(
            "unparseable instant '{input}' (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)"
        ))
    })
}

/// Parse a JSON activity document into records.
///
/// Accepts either a bare array of records or a history document
/// (`{ "version": 1, "entries": [...] }`). Each record is sanitized with
/// [`sanitize_total`]; an unparseable date fails the whole document.
///
/// # Errors
/// Returns `Json` for malformed JSON, `InvalidDocument` for an unexpected
/// top-level shape, and `InvalidRecord` naming the first bad entry.
pub fn parse_records_json(input: &str) -> Result<Vec<DailyRecord>> {
    let document: Value = serde_json::from_str(input)?;
    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("entries") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(ActivityStatsError::InvalidDocument(
                    "'entries' must be an array".to_string(),
                ));
            }
            None => {
                return Err(ActivityStatsError::InvalidDocument(
                    "expected an array of records or an object with 'entries'".to_string(),
                ));
            }
        },
        _ => {
            return Err(ActivityStatsError::InvalidDocument(
                "expected an array of records or an object with 'entries'".to_string(),
            ));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<DailyRecord>(item).map_err(|e| {
                ActivityStatsError::InvalidRecord {
                    index,
                    message: e.to_string(),
                }
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
