use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::activity::{parse_date, parse_instant};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::output::OutputFormat;
use crate::state;

/// Load configuration honoring `--no-config` and `--config`.
///
/// # Errors
/// Returns an error if the config file cannot be read, parsed or validated.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// History file to use: `--history`, then `history.path`, then the data directory.
pub(crate) fn resolve_history_path(cli_path: Option<&Path>, config: &Config) -> PathBuf {
    if let Some(path) = cli_path {
        return path.to_path_buf();
    }
    config
        .history
        .path
        .as_deref()
        .map_or_else(state::default_history_path, PathBuf::from)
}

/// Reference instant from `--now`, or the local clock.
///
/// # Errors
/// Returns an error if `--now` is not a recognised date or date-time.
pub(crate) fn resolve_now(now: Option<&str>) -> crate::Result<NaiveDateTime> {
    now.map_or_else(|| Ok(Local::now().naive_local()), parse_instant)
}

/// Day from `--date`, or today on the local clock.
///
/// # Errors
/// Returns an error if `--date` cannot be parsed.
pub(crate) fn resolve_date(date: Option<&str>) -> crate::Result<NaiveDate> {
    date.map_or_else(|| Ok(Local::now().date_naive()), parse_date)
}

pub(crate) fn resolve_format(cli_format: Option<OutputFormat>, config: &Config) -> OutputFormat {
    cli_format.unwrap_or(config.output.format)
}

pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
