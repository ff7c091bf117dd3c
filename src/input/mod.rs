//! Input selection
//!
//! An [`InputSource`] names where the primary document comes from; opening it
//! yields an [`Input`] that pairs the label used in the output header with a
//! reader owned for the rest of the run.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use tracing::debug;

use crate::errors::{PropsError, Result};

/// Where the primary properties document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Label written into the generated header
    pub fn label(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Open the source for reading
    pub fn open(&self) -> Result<Input> {
        let reader: Box<dyn Read> = match self {
            InputSource::Stdin => Box::new(io::stdin().lock()),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|source| PropsError::Open {
                    path: path.clone(),
                    source,
                })?;
                Box::new(BufReader::new(file))
            }
        };
        debug!(source = %self, "input opened");
        Ok(Input::new(self.label(), reader))
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// An opened input: header label plus the reader
pub struct Input {
    pub label: String,
    pub reader: Box<dyn Read>,
}

impl Input {
    pub fn new(label: impl Into<String>, reader: Box<dyn Read>) -> Self {
        Self {
            label: label.into(),
            reader,
        }
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input").field("label", &self.label).finish_non_exhaustive()
    }
}
