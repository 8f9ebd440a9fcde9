use crate::activity::{ActivityHistory, GoalProgress};
use crate::cli::{Cli, SummaryArgs};
use crate::output::StatsReport;
use crate::{EXIT_CONFIG_ERROR, EXIT_GOAL_NOT_MET, EXIT_SUCCESS};

use super::context::{load_config, resolve_format, resolve_history_path, resolve_now, write_output};

#[must_use]
pub fn run_summary(args: &SummaryArgs, cli: &Cli) -> i32 {
    match run_summary_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            crate::output::print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Summarize the activity history as of `--now`.
///
/// # Errors
/// Returns an error if the config is invalid, `--now` cannot be parsed,
/// or the output cannot be written.
pub fn run_summary_impl(args: &SummaryArgs, cli: &Cli) -> crate::Result<i32> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let history_path = resolve_history_path(args.history.as_deref(), &config);
    let now = resolve_now(args.now.as_deref())?;

    let history = ActivityHistory::load_or_default(&history_path);
    let stats = history.stats(now);

    let goal = config
        .goal
        .daily_seconds()
        .map(|goal_seconds| GoalProgress::compute(history.records(), now.date(), goal_seconds));
    let goal_met = goal.as_ref().is_none_or(|g| g.met);

    let report = StatsReport::new(now, stats).with_goal(goal);
    let output = resolve_format(args.format, &config).format_report(&report)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if args.fail_under_goal && !goal_met {
        return Ok(EXIT_GOAL_NOT_MET);
    }
    Ok(EXIT_SUCCESS)
}
