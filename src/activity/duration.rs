//! Duration display and parsing for tracked activity time.
//!
//! Display: `3725` → `1h 2m 5s`.
//! Parsing accepts bare seconds (`90`) or unit groups (`1h30m`, `2h 5m 10s`, `45s`).

use crate::{ActivityStatsError, Result};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3600;

/// Format a number of seconds as `"{h}h {m}m {s}s"`.
///
/// Hours are not wrapped into days, so long totals read as e.g. `52h 0m 0s`.
#[must_use]
pub fn format_seconds(total: u64) -> String {
    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total % SECONDS_PER_MINUTE;
    format!("{hours}h {minutes}m {seconds}s")
}

/// Parse a human-readable duration into seconds.
///
/// Supported units: `s`, `m`, `h` (with long forms such as `min`, `hours`).
/// A bare integer is taken as seconds.
///
/// # Errors
/// Returns an error if the input is empty, malformed, uses an unknown unit,
/// overflows, or totals zero seconds.
pub fn parse_duration(input: &str) -> Result<u64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ActivityStatsError::InvalidDuration(
            "Duration cannot be empty. Expected e.g. 90, 45s, 30m, 1h30m".to_string(),
        ));
    }

    if input.bytes().all(|b| b.is_ascii_digit()) {
        let value: u64 = input.parse().map_err(|_| {
            ActivityStatsError::InvalidDuration(format!("Duration out of range: '{input}'"))
        })?;
        return non_zero(value);
    }

    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut total: u64 = 0;
    let mut rest = compact.as_str();

    while !rest.is_empty() {
        let unit_start = rest.find(|c: char| !c.is_ascii_digit()).ok_or_else(|| {
            ActivityStatsError::InvalidDuration(format!(
                "Invalid duration format: '{input}'. Missing unit after '{rest}'"
            ))
        })?;
        if unit_start == 0 {
            return Err(ActivityStatsError::InvalidDuration(format!(
                "Invalid duration format: '{input}'. Missing number before '{rest}'"
            )));
        }

        let (num_str, tail) = rest.split_at(unit_start);
        let unit_end = tail.find(|c: char| c.is_ascii_digit()).unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_end);

        let value: u64 = num_str.parse().map_err(|_| {
            ActivityStatsError::InvalidDuration(format!("Duration out of range: '{num_str}'"))
        })?;

        let multiplier = match unit.to_lowercase().as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => 1,
            "m" | "min" | "mins" | "minute" | "minutes" => SECONDS_PER_MINUTE,
            "h" | "hr" | "hrs" | "hour" | "hours" => SECONDS_PER_HOUR,
            _ => {
                return Err(ActivityStatsError::InvalidDuration(format!(
                    "Invalid duration unit: '{unit}'. Supported units: s, m, h"
                )));
            }
        };

        total = value
            .checked_mul(multiplier)
            .and_then(|secs| total.checked_add(secs))
            .ok_or_else(|| {
                ActivityStatsError::InvalidDuration(format!("Duration out of range: '{input}'"))
            })?;
        rest = next;
    }

    non_zero(total)
}

fn non_zero(value: u64) -> Result<u64> {
    if value == 0 {
        return Err(ActivityStatsError::InvalidDuration(
            "Duration must be greater than zero".to_string(),
        ));
    }
    Ok(value)
}
