//! Diagnostic logging to stderr.
//!
//! Level comes from `-v`/`-q` unless `RUST_LOG` is set:
//! - quiet: `error`
//! - default: `warn`
//! - `-v`: `info`, `-vv`: `debug`, `-vvv` and beyond: `trace`

use tracing_subscriber::EnvFilter;

/// Map CLI verbosity flags to a tracing filter directive.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global stderr subscriber.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
