//! Diagnostic logging
//!
//! Logs go to stderr so they never mix with the properties written to
//! stdout. Verbosity follows `RUST_LOG` and defaults to warnings only.

use tracing_subscriber::{fmt, EnvFilter};

use crate::context::Environment;

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`]
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(env: &Environment) {
    let _ = fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_ansi(env.stderr_isatty)
        .with_target(false)
        .try_init();
}
