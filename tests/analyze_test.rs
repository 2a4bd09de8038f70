//! Analyze command contract tests
//!
//! Drives the built binary end to end: report content and ordering,
//! output formats, stdin input, config defaults, the --fail-above exit
//! code, and parse-failure behavior.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// A small source unit with known metrics:
/// gv=1, lv=1, cv=1, loc=5, weighted=5 (while 3 + call 2),
/// complexity=10, inline comments=1, density=0.20, index=16.20.
const FIXTURE: &str = r#"// tracks the running total
var total = 0;
const step = 1;

function tick() {
    var local = 0;
    while (total < 10) {
        total += step;
    }
}

tick();
"#;

fn mindex_bin() -> String {
    env!("CARGO_BIN_EXE_mindex").to_string()
}

fn setup_fixture(dir: &Path) -> std::path::PathBuf {
    let file = dir.join("app.js");
    std::fs::write(&file, FIXTURE).unwrap();
    file
}

fn run_analyze(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(mindex_bin())
        .args(args)
        .output()
        .expect("failed to run mindex");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (output.status.code().unwrap_or(-1), stdout, stderr)
}

#[test]
fn test_text_report_values_and_order() {
    let dir = tempfile::tempdir().unwrap();
    let file = setup_fixture(dir.path());

    let (code, stdout, _) = run_analyze(&["analyze", file.to_str().unwrap()]);
    assert_eq!(code, 0);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "global variables: 1",
            "local variables: 1",
            "const variables: 1",
            "complexity: 10",
            "lines of code: 5",
            "inline comments: 1",
            "comment density: 0.20",
            "maintainability index: 16.20",
        ]
    );
}

#[test]
fn test_bare_path_runs_analyze() {
    let dir = tempfile::tempdir().unwrap();
    let file = setup_fixture(dir.path());

    let (code, stdout, _) = run_analyze(&[file.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("maintainability index: 16.20"));
}

#[test]
fn test_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let file = setup_fixture(dir.path());

    let (code, stdout, _) = run_analyze(&["analyze", file.to_str().unwrap(), "--format", "json"]);
    assert_eq!(code, 0);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed["global_variables"], 1);
    assert_eq!(parsed["local_variables"], 1);
    assert_eq!(parsed["const_variables"], 1);
    assert_eq!(parsed["complexity"], 10.0);
    assert_eq!(parsed["lines_of_code"], 5);
    assert_eq!(parsed["inline_comments"], 1);
    assert_eq!(parsed["comment_density"], 0.2);
    assert_eq!(parsed["maintainability_index"], 16.2);
}

#[test]
fn test_stdin_source() {
    let mut child = Command::new(mindex_bin())
        .args(["analyze", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn mindex");
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(FIXTURE.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lines of code: 5"));
}

#[test]
fn test_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = setup_fixture(dir.path());
    let report = dir.path().join("report.json");

    let (code, stdout, _) = run_analyze(&[
        "analyze",
        file.to_str().unwrap(),
        "--format",
        "json",
        "-o",
        report.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);
    assert!(stdout.is_empty());

    let written = std::fs::read_to_string(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).expect("valid JSON");
    assert_eq!(parsed["maintainability_index"], 16.2);
}

#[test]
fn test_fail_above_gate() {
    let dir = tempfile::tempdir().unwrap();
    let file = setup_fixture(dir.path());

    let (code, _, stderr) = run_analyze(&["analyze", file.to_str().unwrap(), "--fail-above", "10"]);
    assert_eq!(code, 1, "index 16.20 should trip a threshold of 10");
    assert!(stderr.contains("exceeds threshold"));

    let (code, _, _) = run_analyze(&["analyze", file.to_str().unwrap(), "--fail-above", "100"]);
    assert_eq!(code, 0, "index 16.20 should pass a threshold of 100");
}

#[test]
fn test_config_defaults_apply() {
    let dir = tempfile::tempdir().unwrap();
    let file = setup_fixture(dir.path());
    std::fs::write(dir.path().join("mindex.toml"), "[defaults]\nformat = \"json\"\n").unwrap();

    let (code, stdout, _) = run_analyze(&["analyze", file.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(
        serde_json::from_str::<serde_json::Value>(&stdout).is_ok(),
        "config default should switch output to JSON"
    );
}

#[test]
fn test_cli_flag_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let file = setup_fixture(dir.path());
    std::fs::write(dir.path().join("mindex.toml"), "[defaults]\nformat = \"json\"\n").unwrap();

    let (code, stdout, _) = run_analyze(&["analyze", file.to_str().unwrap(), "--format", "text"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("global variables:"));
}

#[test]
fn test_parse_failure_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("broken.js");
    std::fs::write(&file, "function (((").unwrap();

    let (code, stdout, stderr) = run_analyze(&["analyze", file.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty(), "no partial report on parse failure");
    assert!(stderr.contains("syntax error"));
}

#[test]
fn test_missing_file_errors() {
    let (code, _, stderr) = run_analyze(&["analyze", "/nonexistent/app.js"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("failed to read file"));
}

#[test]
fn test_empty_program_reports_zeroes() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("empty.js");
    std::fs::write(&file, "").unwrap();

    let (code, stdout, _) =
        run_analyze(&["analyze", file.to_str().unwrap(), "--format", "json"]);
    assert_eq!(code, 0);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed["lines_of_code"], 0);
    assert_eq!(parsed["complexity"], 0.0);
    assert_eq!(parsed["comment_density"], 0.0);
    assert_eq!(parsed["maintainability_index"], 0.0);
}
