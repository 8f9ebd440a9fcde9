use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader, FileSystem};
use crate::output::OutputFormat;
use crate::{ActivityStatsError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate => run_config_validate(cli.config.as_deref()),
        ConfigAction::Show { format } => run_config_show(*format, cli),
    }
}

fn run_config_validate(config_path: Option<&Path>) -> i32 {
    let loader = FileConfigLoader::new();
    match run_config_validate_impl(&loader, config_path) {
        Ok(path) => {
            println!("Configuration is valid: {path}");
            EXIT_SUCCESS
        }
        Err(e) => {
            crate::output::print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validate the explicit config file, or the discovered one.
///
/// Returns the path that was checked.
///
/// # Errors
/// Returns an error if no file is found, or it has invalid TOML, an
/// unsupported version, or invalid values.
pub(crate) fn run_config_validate_impl(
    loader: &FileConfigLoader<impl FileSystem>,
    config_path: Option<&Path>,
) -> Result<String> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => loader.discover().ok_or_else(|| {
            ActivityStatsError::Config("No configuration file found".to_string())
        })?,
    };

    loader.load_from_path(&path)?;
    Ok(path.display().to_string())
}

fn run_config_show(format: OutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            crate::output::print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Render the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub(crate) fn run_config_show_impl(format: OutputFormat, cli: &Cli) -> Result<String> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => Ok(format_config_text(&config)),
    }
}

pub(crate) fn format_config_text(config: &Config) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[history]\n");
    let path = config.history.path.as_deref().unwrap_or("(default)");
    let _ = writeln!(output, "  path = {path}");
    match config.history.max_age_days {
        Some(days) => {
            let _ = writeln!(output, "  max_age_days = {days}");
        }
        None => output.push_str("  max_age_days = (keep all)\n"),
    }

    output.push_str("\n[goal]\n");
    match config.goal.daily_minutes {
        Some(minutes) => {
            let _ = writeln!(output, "  daily_minutes = {minutes}");
        }
        None => output.push_str("  daily_minutes = (none)\n"),
    }

    output.push_str("\n[output]\n");
    let format = match config.output.format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "json",
    };
    let _ = writeln!(output, "  format = {format}");

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
