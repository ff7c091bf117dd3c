//! Common test utilities for props integration tests
//!
//! This module provides shared test infrastructure including:
//! - CLI invocation helpers (with and without stdin)
//! - Output parsing helpers
//! - Fixture files in temporary directories

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Exit status codes matching the Rust application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Error = 1,
    Usage = 2,
}

impl From<i32> for ExitStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            2 => ExitStatus::Usage,
            _ => ExitStatus::Error,
        }
    }
}

/// Result of running the props CLI
#[derive(Debug)]
pub struct CliResponse {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Exit status code
    pub exit_status: ExitStatus,
    /// Raw exit code
    pub exit_code: i32,
}

impl CliResponse {
    /// Check if stdout contains a substring
    pub fn contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle)
    }

    /// Non-comment lines of stdout
    pub fn entries(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| !l.starts_with('#')).collect()
    }

    /// Comment lines of stdout
    pub fn comments(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| l.starts_with('#')).collect()
    }
}

impl std::ops::Deref for CliResponse {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.stdout
    }
}

/// Directory holding fixture files for one test
pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Write `content` to `name` and return its path
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// Path of a file that does not exist
    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Run props with the given arguments and no stdin
pub fn props(args: &[&str]) -> CliResponse {
    run(args, None)
}

/// Run props with the given arguments, feeding `stdin`
pub fn props_with_stdin(args: &[&str], stdin: &str) -> CliResponse {
    run(args, Some(stdin.as_bytes()))
}

fn run(args: &[&str], stdin: Option<&[u8]>) -> CliResponse {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_props"));
    cmd.args(args);
    cmd.env_remove("RUST_LOG");

    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    if let Some(stdin_data) = stdin {
        cmd.stdin(Stdio::piped());
        let mut child = cmd.spawn().expect("Failed to spawn command");
        {
            let stdin = child.stdin.as_mut().expect("Failed to open stdin");
            stdin.write_all(stdin_data).expect("Failed to write to stdin");
        }
        let output = child.wait_with_output().expect("Failed to wait for command");
        parse_output(output)
    } else {
        cmd.stdin(Stdio::null());
        let output = cmd.output().expect("Failed to execute command");
        parse_output(output)
    }
}

fn parse_output(output: Output) -> CliResponse {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(1);

    CliResponse {
        stdout,
        stderr,
        exit_status: ExitStatus::from(exit_code),
        exit_code,
    }
}
