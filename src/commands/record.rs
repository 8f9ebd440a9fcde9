use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::activity::{ActivityHistory, format_seconds, parse_duration};
use crate::cli::{Cli, RecordArgs};
use crate::{ActivityStatsError, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{load_config, resolve_date, resolve_history_path};

#[must_use]
pub fn run_record(args: &RecordArgs, cli: &Cli) -> i32 {
    match run_record_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            crate::output::print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Add time to a day in the history file.
///
/// # Errors
/// Returns an error if the duration or date is invalid, or the history
/// file exists but cannot be read, parsed or written.
pub fn run_record_impl(args: &RecordArgs, cli: &Cli) -> crate::Result<i32> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let seconds = parse_duration(&args.duration)?;
    let date = resolve_date(args.date.as_deref())?;
    let history_path = resolve_history_path(args.history.as_deref(), &config);

    let retention = config
        .history
        .max_age_days
        .map(|days| (days, Local::now().date_naive()));
    let total = record_seconds(&history_path, date, seconds, retention)?;

    if !cli.quiet {
        println!(
            "Recorded {} on {date} (total {})",
            format_seconds(seconds),
            format_seconds(total)
        );
    }
    Ok(EXIT_SUCCESS)
}

/// Merge `seconds` into `date`, prune by `(max_age_days, today)` and save.
/// Returns the day's total as saved.
///
/// A `date` that retention would prune is rejected before anything is
/// written. An unreadable history file is an error here so it is never
/// overwritten.
pub(crate) fn record_seconds(
    history_path: &Path,
    date: NaiveDate,
    seconds: u64,
    retention: Option<(u32, NaiveDate)>,
) -> crate::Result<u64> {
    if let Some((days, today)) = retention {
        let cutoff = ActivityHistory::retention_cutoff(days, today);
        if date < cutoff {
            return Err(ActivityStatsError::InvalidDate(format!(
                "{date} is older than the {days}-day history retention (oldest kept: {cutoff})"
            )));
        }
    }

    let mut history = if history_path.exists() {
        ActivityHistory::load(history_path)?
    } else {
        ActivityHistory::new()
    };

    history.add_seconds(date, seconds);

    if let Some((days, today)) = retention {
        history.apply_retention(days, today);
    }

    history.save(history_path)?;
    Ok(history.total_for(date))
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
