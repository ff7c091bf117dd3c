//! CLI argument scanning
//!
//! Tokens are scanned left to right into an [`Args`] value. Anything that is
//! not a recognized flag is an override assignment, so `-x=1` or `--` end up
//! as overrides rather than errors.

use std::path::PathBuf;

use tracing::warn;

use crate::errors::{PropsError, Result};
use crate::input::InputSource;

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print usage and exit with status 2
    Help,
    /// Print version information and exit with status 0
    Version,
    /// Merge overrides into the selected input
    Run(Args),
}

/// Arguments for a merge run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    /// `-` was given
    pub stdin: bool,
    /// Every `-f`/`--file` path, in order
    pub files: Vec<PathBuf>,
    /// Override assignments, in order
    pub overrides: Vec<String>,
}

impl Args {
    /// Resolve the input to read.
    ///
    /// `-` wins over `-f`; among several `-f` paths the first one wins.
    pub fn input_source(&self) -> Result<InputSource> {
        if self.stdin {
            return Ok(InputSource::Stdin);
        }

        let mut files = self.files.iter();
        let first = files
            .next()
            .ok_or_else(|| PropsError::Usage("No input detected".to_string()))?;

        for ignored in files {
            warn!(path = %ignored.display(), "ignoring extra input file");
        }

        Ok(InputSource::File(first.clone()))
    }
}

/// Scan command-line tokens (program name excluded)
pub fn parse_args<I, S>(tokens: I) -> Result<Invocation>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut tokens = tokens.into_iter().map(Into::into).peekable();

    if tokens.peek().is_none() {
        return Ok(Invocation::Help);
    }

    let mut args = Args::default();

    while let Some(token) = tokens.next() {
        match token.as_str() {
            "-h" | "--help" => return Ok(Invocation::Help),
            "--version" => return Ok(Invocation::Version),
            "-" => args.stdin = true,
            "-f" | "--file" => {
                let path = tokens.next().ok_or_else(|| {
                    PropsError::Usage(format!("option '{}' requires a file path", token))
                })?;
                args.files.push(PathBuf::from(path));
            }
            _ => args.overrides.push(token),
        }
    }

    Ok(Invocation::Run(args))
}
