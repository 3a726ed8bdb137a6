//! Binary-level tests for argument handling and exit codes
//!
//! None of these reach the network: each case fails or exits before a
//! request is sent.

use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    let home = TempDir::new().unwrap();
    Command::new(env!("CARGO_BIN_EXE_ssm-params"))
        .args(args)
        .current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .env_remove("SSM_PARAMS_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_version_exits_zero() {
    let output = run(&["--version"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_exits_zero() {
    let output = run(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--path"));
}

#[test]
fn test_unknown_output_format_exits_one_without_stdout() {
    let output = run(&["--path", "/app", "--output", "yaml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_shell_and_output_conflict() {
    let output = run(&["--shell", "--output", "json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_key_without_path_is_usage_error() {
    let output = run(&["--key", "DB_HOST"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--key requires at least one --path"));
    assert!(stderr.contains("Usage:"));
}

#[test]
fn test_missing_config_file_exits_one() {
    let output = run(&["--config", "/nonexistent/ssm-params.toml", "--path", "/app"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Configuration file not found"));
}

#[test]
fn test_completions_exit_zero() {
    let output = run(&["--completions", "bash"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("ssm-params"));
}
