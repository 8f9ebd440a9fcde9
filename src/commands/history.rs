use std::fmt::Write;

use crate::activity::{ActivityHistory, DailyRecord, format_seconds};
use crate::cli::{Cli, HistoryArgs};
use crate::output::OutputFormat;
use crate::{ActivityStatsError, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{load_config, resolve_format, resolve_history_path};

#[must_use]
pub fn run_history(args: &HistoryArgs, cli: &Cli) -> i32 {
    match run_history_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            crate::output::print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// List recorded days, most recent first, limited by `--limit`.
///
/// # Errors
/// Returns an error if the config is invalid or JSON output fails.
pub fn run_history_impl(args: &HistoryArgs, cli: &Cli) -> crate::Result<i32> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let history_path = resolve_history_path(args.history.as_deref(), &config);
    let history = ActivityHistory::load_or_default(&history_path);

    let entries: Vec<&DailyRecord> = history.records().iter().rev().take(args.limit).collect();

    let output = match resolve_format(args.format, &config) {
        OutputFormat::Text => format_history_text(&entries, history.len()),
        OutputFormat::Json => format_history_json(&entries)?,
    };

    println!("{output}");
    Ok(EXIT_SUCCESS)
}

pub(crate) fn format_history_text(entries: &[&DailyRecord], total_entries: usize) -> String {
    if entries.is_empty() {
        return "No activity recorded yet.\n\nAdd time with: activity-stats record 30m".to_string();
    }

    let mut output = String::new();
    let _ = writeln!(
        output,
        "History ({} of {} days)\n",
        entries.len(),
        total_entries
    );
    for entry in entries {
        let _ = writeln!(
            output,
            "  {}  {}",
            entry.date,
            format_seconds(entry.total_seconds)
        );
    }
    output
}

pub(crate) fn format_history_json(entries: &[&DailyRecord]) -> crate::Result<String> {
    #[derive(serde::Serialize)]
    struct HistoryOutput<'a> {
        count: usize,
        entries: &'a [&'a DailyRecord],
    }

    let output = HistoryOutput {
        count: entries.len(),
        entries,
    };
    serde_json::to_string_pretty(&output).map_err(ActivityStatsError::from)
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
