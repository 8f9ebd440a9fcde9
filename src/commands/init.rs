use crate::cli::InitArgs;
use crate::state::atomic_write;
use crate::{ActivityStatsError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            crate::output::print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Write a commented configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ActivityStatsError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    atomic_write(output_path, generate_config_template().as_bytes()).map_err(|e| {
        ActivityStatsError::FileAccess {
            path: output_path.clone(),
            source: e,
        }
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub const fn generate_config_template() -> &'static str {
    r#"# activity-stats configuration file
version = "1"

[history]
# History file (default: platform data directory)
# path = "activity-history.json"

# Drop days older than this when recording
# max_age_days = 400

[goal]
# Daily activity goal in minutes
# daily_minutes = 30

[output]
# Default output format: "text" or "json"
format = "text"
"#
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
