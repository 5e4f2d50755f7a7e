//! Integration tests for the lookupsheet binary

use std::path::Path;
use std::process::Command;

fn run(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_lookupsheet"))
        // Keep stderr deterministic regardless of the caller's RUST_LOG.
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute lookupsheet");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn write_definition(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
}

const DEFINITION: &str = r#"
id = "demo"

[[columns]]
name = "A"
type = "string"

[[columns]]
name = "B"
type = "int"

[[columns]]
name = "C"
type = "string"

[[cells]]
column = "A"
row = 1
value = "x"

[[cells]]
column = "C"
row = 1
value = "lookup(A, 1)"

[[cells]]
column = "A"
row = 1
value = "Hello, World"

[[cells]]
column = "B"
row = 3
value = "12"
"#;

#[test]
fn test_export_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_definition(dir.path(), "demo.toml", DEFINITION);

    let (stdout, _, code) = run(&[&file]);
    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "Row,A,B,C\n1,\"Hello, World\",,\"Hello, World\"\n3,,12,\n"
    );
}

#[test]
fn test_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_definition(dir.path(), "demo.toml", DEFINITION);
    let out = dir.path().join("demo.csv");

    let (stdout, _, code) = run(&[&file, "-o", out.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Exported sheet demo"));
    let csv = std::fs::read_to_string(out).unwrap();
    assert!(csv.starts_with("Row,A,B,C\n"));
}

const CYCLE: &str = r#"
[[columns]]
name = "A"
type = "string"

[[columns]]
name = "B"
type = "string"

[[cells]]
column = "A"
row = 1
value = "lookup(B, 1)"

[[cells]]
column = "B"
row = 1
value = "lookup(A, 1)"

[[cells]]
column = "B"
row = 2
value = "after"
"#;

#[test]
fn test_rejection_fails_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_definition(dir.path(), "cycle.toml", CYCLE);

    let (stdout, stderr, code) = run(&[&file]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Cell B1 rejected (cycle)"));
}

#[test]
fn test_keep_going_reports_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_definition(dir.path(), "cycle.toml", CYCLE);

    let (stdout, stderr, code) = run(&[&file, "--keep-going"]);
    assert_eq!(code, 0);
    assert!(stderr.contains("Warning: cell B1 rejected (cycle)"));
    assert_eq!(stdout, "Row,A,B\n1,,\n2,,after\n");
}

#[test]
fn test_unsupported_column_type() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_definition(
        dir.path(),
        "bad.toml",
        "[[columns]]\nname = \"A\"\ntype = \"money\"\n",
    );

    let (_, stderr, code) = run(&[&file]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unsupported column type: money"));
}

#[test]
fn test_missing_file() {
    let (_, stderr, code) = run(&["/definitely/not/here.toml"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Failed to load"));
}
