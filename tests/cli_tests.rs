// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI integration tests.
//!
//! These tests run the actual clustercodec binary and verify its behavior.
//! Only address literals are used so no test depends on DNS.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the built clustercodec binary
fn clustercodec_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_clustercodec"))
}

/// Run clustercodec with arguments
fn run(args: &[&str]) -> Output {
    let bin = clustercodec_bin();
    Command::new(&bin)
        .args(args)
        .output()
        .unwrap_or_else(|_| panic!("Failed to run {:?}", bin))
}

/// Run clustercodec with `input` on stdin
fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(clustercodec_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn clustercodec");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

/// Assert success and return stdout
fn stdout_ok(args: &[&str], output: Output) -> String {
    assert!(
        output.status.success(),
        "Command failed: {:?}\nstdout: {}\nstderr: {}",
        args,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Assert failure and return stderr
fn stderr_err(args: &[&str], output: Output) -> String {
    assert!(
        !output.status.success(),
        "Command should have failed: {:?}\nstdout: {}",
        args,
        String::from_utf8_lossy(&output.stdout)
    );
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Temporary directory removed on drop
struct TempDir(PathBuf);

impl TempDir {
    fn new(tag: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "clustercodec_cli_{}_{}",
            tag,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.0.join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help() {
    let args = ["--help"];
    let stdout = stdout_ok(&args, run(&args));
    assert!(stdout.contains("endpoint"));
    assert!(stdout.contains("key"));
    assert!(stdout.contains("result"));
}

#[test]
fn test_version() {
    let args = ["--version"];
    let stdout = stdout_ok(&args, run(&args));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Address commands
// ============================================================================

#[test]
fn test_endpoint_ipv4() {
    let args = ["endpoint", "127.0.0.1:9042"];
    assert_eq!(stdout_ok(&args, run(&args)).trim(), "127.0.0.1:9042");
}

#[test]
fn test_endpoint_ipv6() {
    let args = ["endpoint", "[::1]:7000"];
    assert_eq!(stdout_ok(&args, run(&args)).trim(), "[::1]:7000");
}

#[test]
fn test_endpoint_malformed() {
    let args = ["endpoint", "127.0.0.1"];
    let stderr = stderr_err(&args, run(&args));
    assert!(stderr.contains("Malformed address"));
}

#[test]
fn test_endpoint_help_shows_token_name() {
    let args = ["endpoint", "--help"];
    let stdout = stdout_ok(&args, run(&args));
    assert!(stdout.contains("HOST:PORT"));
}

#[test]
fn test_verbose_failure_logs_error_fields() {
    let args = ["--verbose", "endpoint", "127.0.0.1"];
    let output = Command::new(clustercodec_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run clustercodec");
    let stderr = stderr_err(&args, output);
    assert!(stderr.contains("command failed"));
    assert!(stderr.contains(r#"("input", "127.0.0.1")"#));
}

#[test]
fn test_key_literal() {
    let args = ["key", "10.1.2.3"];
    assert_eq!(stdout_ok(&args, run(&args)).trim(), "10.1.2.3");
}

// ============================================================================
// Result command
// ============================================================================

#[test]
fn test_result_from_file() {
    let dir = TempDir::new("result_file");
    let path = dir.write(
        "prime.json",
        r#"{"rows": [{"a": 1}], "columnTypes": {"a": "int"}, "delayInMs": 500}"#,
    );
    let path = path.to_str().unwrap();
    let args = ["result", path];
    assert_eq!(
        stdout_ok(&args, run(&args)).trim(),
        r#"{"rows":[{"a":1}],"columnTypes":{"a":"int"},"delayInMs":500}"#
    );
}

#[test]
fn test_result_keeps_column_order() {
    let args = ["result"];
    let output = run_with_stdin(
        &args,
        r#"{"rows": [{"z": 1, "a": 2}], "columnTypes": {"z": "int", "a": "int"}}"#,
    );
    assert_eq!(
        stdout_ok(&args, output).trim(),
        r#"{"rows":[{"z":1,"a":2}],"columnTypes":{"z":"int","a":"int"}}"#
    );
}

#[test]
fn test_result_from_stdin() {
    let args = ["result"];
    let output = run_with_stdin(&args, r#"{"delayInMs": 5}"#);
    assert_eq!(stdout_ok(&args, output).trim(), r#"{"delayInMs":5}"#);
}

#[test]
fn test_result_empty_document() {
    let args = ["result", "-"];
    let output = run_with_stdin(&args, "{}");
    assert_eq!(stdout_ok(&args, output).trim(), "{}");
}

#[test]
fn test_result_inconsistent_fields() {
    let args = ["result"];
    let output = run_with_stdin(&args, r#"{"rows": []}"#);
    let stderr = stderr_err(&args, output);
    assert!(stderr.contains("required or none of them"));
}

#[test]
fn test_result_pretty_from_config() {
    let dir = TempDir::new("result_config");
    let config = dir.write("mapper.toml", "pretty = true\n");
    let config = config.to_str().unwrap();
    let args = ["--config", config, "result"];
    let output = run_with_stdin(&args, r#"{"delayInMs": 1}"#);
    assert_eq!(stdout_ok(&args, output).trim(), "{\n  \"delayInMs\": 1\n}");
}

#[test]
fn test_invalid_config() {
    let dir = TempDir::new("bad_config");
    let config = dir.write("mapper.toml", "pretty = 3\n");
    let config = config.to_str().unwrap();
    let args = ["--config", config, "codecs"];
    let stderr = stderr_err(&args, run(&args));
    assert!(stderr.contains("Invalid config"));
}

// ============================================================================
// Codecs command
// ============================================================================

#[test]
fn test_codecs_table() {
    let args = ["codecs"];
    let stdout = stdout_ok(&args, run(&args));
    assert!(stdout.contains("socket-address"));
    assert!(stdout.contains("address-key"));
    assert!(stdout.contains("success-result"));
}

#[test]
fn test_codecs_json() {
    let args = ["codecs", "--json"];
    let stdout = stdout_ok(&args, run(&args));
    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1]["name"], "address-key");
    assert_eq!(entries[1]["decode_only"], false);
}
