use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "activity-stats")]
#[command(author, version, about = "Daily activity tracker - weekly/monthly totals and streaks")]
#[command(long_about = "Record daily activity time and summarize it as weekly and monthly \
    totals, active days, and the best run of consecutive days.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Daily goal not met (summary --fail-under-goal)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize the recorded history: week, month, active days, best streak
    Summary(SummaryArgs),

    /// Compute stats for an exported JSON document without touching the history
    Compute(ComputeArgs),

    /// Add tracked time to a day
    Record(RecordArgs),

    /// List recorded days, newest first
    History(HistoryArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    #[command(name = "config")]
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// History file (default: from config, then the platform data directory)
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Reference instant, YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS (default: now)
    #[arg(long)]
    pub now: Option<String>,

    /// Output format (default: from config, then text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exit with code 1 when a daily goal is configured and not yet met
    #[arg(long)]
    pub fail_under_goal: bool,
}

#[derive(Parser, Debug)]
pub struct ComputeArgs {
    /// JSON document to read (`-` for stdin)
    pub input: PathBuf,

    /// Reference instant, YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS (default: now)
    #[arg(long)]
    pub now: Option<String>,

    /// Output format (default: from config, then text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct RecordArgs {
    /// Time to add, e.g. 90, 45s, 30m, 1h30m
    pub duration: String,

    /// Day to record against, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<String>,

    /// History file (default: from config, then the platform data directory)
    #[arg(long)]
    pub history: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// History file (default: from config, then the platform data directory)
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Maximum number of entries to show
    #[arg(short = 'n', long, default_value = "10")]
    pub limit: usize,

    /// Output format (default: from config, then text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".activity-stats.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    ///
    /// Checks `--config` when given, otherwise the discovered config file.
    Validate,

    /// Display the effective configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
