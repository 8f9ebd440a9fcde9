use std::fmt::Write;

use crate::activity::{GoalProgress, format_seconds};
use crate::error::Result;

use super::{StatsFormatter, StatsReport};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct TextFormatter;

impl StatsFormatter for TextFormatter {
    fn format(&self, report: &StatsReport) -> Result<String> {
        let stats = &report.stats;
        let mut output = String::new();

        let _ = writeln!(
            output,
            "Activity Summary (as of {})\n",
            report.now.format(TIMESTAMP_FORMAT)
        );
        let _ = writeln!(output, "  This week:    {}", format_seconds(stats.week));
        let _ = writeln!(output, "  This month:   {}", format_seconds(stats.month));
        let _ = writeln!(output, "  Days active:  {}", stats.days_active);
        let _ = writeln!(
            output,
            "  Best streak:  {}",
            pluralize_days(u64::from(stats.best_streak))
        );

        if let Some(goal) = &report.goal {
            output.push('\n');
            write_goal(&mut output, goal);
        }

        Ok(output)
    }
}

fn write_goal(output: &mut String, goal: &GoalProgress) {
    let _ = writeln!(
        output,
        "  Daily goal:   {} of {} ({:.0}%)",
        format_seconds(goal.today_seconds),
        format_seconds(goal.goal_seconds),
        goal.percent
    );
    if goal.met {
        output.push_str("    Goal reached for today.\n");
    } else {
        let _ = writeln!(
            output,
            "    {} to go.",
            format_seconds(goal.remaining_seconds)
        );
    }
}

fn pluralize_days(count: u64) -> String {
    if count == 1 {
        "1 day".to_string()
    } else {
        format!("{count} days")
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
