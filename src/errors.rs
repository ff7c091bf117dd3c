//! Error types for props

use std::path::PathBuf;
use thiserror::Error;

use crate::status::ExitStatus;

/// Main error type for props
#[derive(Error, Debug)]
pub enum PropsError {
    /// Bad or missing command-line arguments
    #[error("{0}")]
    Usage(String),

    /// The input file could not be opened
    #[error("{}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The properties document could not be decoded
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },
}

impl PropsError {
    /// Exit status the process should end with for this error
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            PropsError::Usage(_) => ExitStatus::Usage,
            PropsError::Open { .. } | PropsError::Io(_) | PropsError::Format { .. } => {
                ExitStatus::Error
            }
        }
    }

    /// Whether the usage text should follow the error message
    pub fn wants_usage(&self) -> bool {
        matches!(self, PropsError::Usage(_))
    }
}

pub type Result<T> = std::result::Result<T, PropsError>;
