use crate::error::Result;

use super::{StatsFormatter, StatsReport};

/// Pretty-printed JSON:
/// ```json
/// {
///   "now": "2024-06-01T00:00:00",
///   "stats": { "week": 0, "month": 0, "days_active": 5, "best_streak": 3 },
///   "goal": { ... }
/// }
/// ```
/// `goal` is omitted when no daily goal is configured.
pub struct JsonFormatter;

impl StatsFormatter for JsonFormatter {
    fn format(&self, report: &StatsReport) -> Result<String> {
        let mut json = serde_json::to_string_pretty(report)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
