use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::activity::{compute_stats, parse_records_json};
use crate::cli::{Cli, ComputeArgs};
use crate::output::StatsReport;
use crate::{ActivityStatsError, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{load_config, resolve_format, resolve_now, write_output};

const STDIN_MARKER: &str = "-";

#[must_use]
pub fn run_compute(args: &ComputeArgs, cli: &Cli) -> i32 {
    match run_compute_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            crate::output::print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Compute stats for an exported record document.
///
/// Records are used as-is: duplicate dates are not merged.
///
/// # Errors
/// Returns an error if the input cannot be read or decoded.
pub fn run_compute_impl(args: &ComputeArgs, cli: &Cli) -> crate::Result<i32> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let now = resolve_now(args.now.as_deref())?;

    let content = read_input(&args.input)?;
    let records = parse_records_json(&content)?;
    tracing::info!(records = records.len(), "computing stats");

    let report = StatsReport::new(now, compute_stats(&records, now));
    let output = resolve_format(args.format, &config).format_report(&report)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(EXIT_SUCCESS)
}

fn read_input(path: &Path) -> crate::Result<String> {
    if path.as_os_str() == STDIN_MARKER {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    fs::read_to_string(path).map_err(|e| ActivityStatsError::FileAccess {
        path: path.to_path_buf(),
        source: e,
    })
}
