//! CLI surface tests: usage, help, version, exit codes
use assert_cmd::Command;
use predicates::prelude::*;

fn props() -> Command {
    let mut cmd = Command::cargo_bin("props").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Usage / Help
// ============================================================================

#[test]
fn test_no_arguments_prints_usage_to_stderr() {
    props()
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Usage: props"));
}

#[test]
fn test_help_flags() {
    for flag in ["-h", "--help"] {
        props()
            .arg(flag)
            .assert()
            .code(2)
            .stdout(predicate::str::contains("Usage: props"))
            .stdout(predicate::str::contains("--file"));
    }
}

#[test]
fn test_help_wins_over_input() {
    props()
        .args(["-", "a=1", "--help"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("a=1").not());
}

// ============================================================================
// Version
// ============================================================================

#[test]
fn test_version() {
    props()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("props {}\n", env!("CARGO_PKG_VERSION"))))
        .stdout(predicate::str::contains("rustc "));
}

// ============================================================================
// Usage errors
// ============================================================================

#[test]
fn test_no_input_detected() {
    props()
        .arg("a=1")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("props: No input detected"))
        .stderr(predicate::str::contains("Usage: props"));
}

#[test]
fn test_file_flag_without_path() {
    for flag in ["-f", "--file"] {
        props()
            .args(["a=1", flag])
            .assert()
            .code(2)
            .stderr(predicate::str::starts_with("props: "))
            .stderr(predicate::str::contains("requires a file path"))
            .stderr(predicate::str::contains("Usage: props"));
    }
}

// ============================================================================
// Successful runs
// ============================================================================

#[test]
fn test_stdin_with_override() {
    props()
        .args(["-", "b=3"])
        .write_stdin("a=1\nb=2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\na=1\n"))
        .stdout(predicate::str::contains("\nb=3\n"))
        .stdout(predicate::str::contains("b=2").not());
}

#[test]
fn test_header_names_stdin() {
    props()
        .arg("-")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "#Generated by props v{} from stdin\n",
            env!("CARGO_PKG_VERSION")
        )));
}
