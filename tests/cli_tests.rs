//! CLI integration tests.
//!
//! Runs the fastjson binary as a subprocess.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn fastjson_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_fastjson"))
}

fn run_with_args(args: &[&str], input: &str) -> (i32, String, String) {
    let binary = fastjson_path();
    let mut child = Command::new(&binary)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to spawn fastjson at {:?}: {}", binary, e));

    {
        let stdin = child.stdin.as_mut().unwrap();
        stdin.write_all(input.as_bytes()).unwrap();
    }

    let output = child.wait_with_output().unwrap();
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

fn run(input: &str) -> (i32, String, String) {
    run_with_args(&[], input)
}

// ============================================================================
// Successful runs
// ============================================================================

#[test]
fn cli_echoes_each_value_on_its_own_line() {
    let (code, stdout, stderr) = run("1 2u [3.5, \"x\"]\n");
    assert_eq!(code, 0, "Expected success, stderr: {}", stderr);
    assert_eq!(stdout, "1\n2u\n[3.5, \"x\"]\n");
}

#[test]
fn cli_writes_objects_in_key_order() {
    let (code, stdout, _stderr) = run(r#"{"b": 1, "a": null}"#);
    assert_eq!(code, 0);
    assert_eq!(stdout, "{\n\"a\" : null,\n\"b\" : 1,\n}\n");
}

#[test]
fn cli_output_is_stable_under_reparse() {
    let input = "// config\n{name: \"n\", list: [1, 2u, 3d], on: true}\n";
    let (code, first, _) = run(input);
    assert_eq!(code, 0);
    let (code, second, _) = run(&first);
    assert_eq!(code, 0);
    assert_eq!(first, second);
}

#[test]
fn cli_empty_input_writes_nothing() {
    let (code, stdout, _stderr) = run("  // nothing here\n");
    assert_eq!(code, 0);
    assert!(stdout.is_empty(), "Expected no output: {}", stdout);
}

#[test]
fn cli_reads_file_argument() {
    let path = std::env::temp_dir().join(format!("fastjson-cli-{}.json", std::process::id()));
    std::fs::write(&path, "[true, false]").unwrap();
    let (code, stdout, _stderr) = run_with_args(&[path.to_str().unwrap()], "");
    std::fs::remove_file(&path).ok();
    assert_eq!(code, 0);
    assert_eq!(stdout, "[true, false]\n");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn cli_reports_parse_error_with_position() {
    let (code, stdout, stderr) = run("1\n[1, 2,");
    assert_eq!(code, 1, "Expected failure exit code");
    assert_eq!(stdout, "1\n", "Values before the error are still written");
    assert!(
        stderr.contains("error: reached end of input while parsing array at line 2, column 7"),
        "Unexpected stderr: {}",
        stderr
    );
}

#[test]
fn cli_strict_rejects_extensions() {
    let (code, _stdout, stderr) = run_with_args(&["--strict"], "{a: 1}");
    assert_eq!(code, 1);
    assert!(stderr.contains("malformed object"), "Unexpected stderr: {}", stderr);

    let (code, stdout, _stderr) = run_with_args(&["--strict"], r#"{"a": 1}"#);
    assert_eq!(code, 0);
    assert_eq!(stdout, "{\n\"a\" : 1,\n}\n");
}

#[test]
fn cli_max_depth() {
    let (code, _stdout, stderr) = run_with_args(&["--max-depth", "2"], "[[[1]]]");
    assert_eq!(code, 1);
    assert!(stderr.contains("nesting depth"), "Unexpected stderr: {}", stderr);

    let (code, _stdout, _stderr) = run_with_args(&["--max-depth", "3"], "[[[1]]]");
    assert_eq!(code, 0);
}

#[test]
fn cli_missing_file() {
    let (code, _stdout, stderr) = run_with_args(&["/nonexistent/fastjson/input.json"], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("error: i/o error"), "Unexpected stderr: {}", stderr);
}

#[test]
fn cli_verbose_logs_to_stderr() {
    let (code, stdout, stderr) = run_with_args(&["-vv"], "[1]");
    assert_eq!(code, 0);
    assert_eq!(stdout, "[1]\n");
    assert!(stderr.contains("values written"), "Unexpected stderr: {}", stderr);
}
