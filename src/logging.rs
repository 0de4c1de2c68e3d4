//! Logging set-up.
//!
//! The TUI owns the terminal, so in that mode logs only go to a file (if one is configured).
//! Headless runs log to stderr, keeping stdout for their output. `NAVSPY_LOG` overrides the
//! verbosity given on the command line.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "NAVSPY_LOG";

#[must_use]
/// Maps `-v` occurrences to a filter directive.
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)))
}

/// Logs to stderr. Safe to call more than once.
pub fn init_stderr(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Logs to `path`, truncating it. Safe to call more than once.
///
/// # Errors
///
/// Returns an error if the file cannot be created.
pub fn init_file(path: &Path, verbosity: u8) -> std::io::Result<()> {
    let file = File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

#[cfg(test)]
#[path = "tests/logging.rs"]
mod tests;
