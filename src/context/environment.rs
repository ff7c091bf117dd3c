//! Environment struct (stdout/stderr)

use std::io::{self, Stderr, Stdout};

/// Execution environment
pub struct Environment {
    pub stdout: Stdout,
    pub stderr: Stderr,
    pub stderr_isatty: bool,
}

impl Environment {
    /// Initialize the environment for the current process
    pub fn init() -> Self {
        Self::default()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            stdout: io::stdout(),
            stderr: io::stderr(),
            stderr_isatty: atty::is(atty::Stream::Stderr),
        }
    }
}
