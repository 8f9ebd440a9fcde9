//! Error reporting for the command layer.
//!
//! Format: `Error: {message}` followed by an optional `  × {detail}` line.

use std::io::Write;

use crate::ActivityStatsError;

/// Write `error` to `w`.
pub fn write_error<W: Write>(w: &mut W, error: &ActivityStatsError) {
    // Nothing sensible to do if stderr itself is gone.
    let _ = writeln!(w, "Error: {}", error.message());
    if let Some(detail) = error.detail() {
        let _ = writeln!(w, "  × {detail}");
    }
}

/// Report `error` on stderr.
pub fn print_error(error: &ActivityStatsError) {
    tracing::debug!(kind = error.error_type(), "command failed");
    let mut stderr = std::io::stderr().lock();
    write_error(&mut stderr, error);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
