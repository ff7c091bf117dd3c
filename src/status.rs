//! Exit status codes for the CLI
//!
//! props uses three exit codes:
//! - 0: Success (including `--version`)
//! - 1: The run failed (unreadable input, unwritable output, malformed document)
//! - 2: Usage problem (no arguments, bad argument, `--help`, no input selected)

use std::process::{ExitCode, Termination};

/// Exit status codes for a props invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Merged properties written, or version printed
    Success = 0,
    /// I/O or format error while running
    Error = 1,
    /// Usage error or help requested
    Usage = 2,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        self.into()
    }
}
