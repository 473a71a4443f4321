//! Integration tests for the mermaid-graph binary.
//!
//! These run the compiled binary against the fixtures in tests/fixtures.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

/// Path to the binary built by `cargo test`.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mermaid-graph"))
}

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

/// Run the binary with the given stdin input and CLI args.
fn run_binary(input: &str, args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("Non-UTF8 output")
}

fn json_of(output: &Output) -> serde_json::Value {
    serde_json::from_str(&stdout_of(output)).expect("stdout is JSON")
}

#[test]
fn test_summary_matches_golden_file() {
    let input = fixture("services.mmd");
    let output = run_binary("", &[input.to_str().unwrap(), "--format", "summary"]);
    let expected = fs::read_to_string(fixture("services.summary.txt")).unwrap();
    assert_eq!(stdout_of(&output), expected);
}

#[test]
fn test_json_from_stdin() {
    let output = run_binary("graph TD\nA --> B\nB --> A\n", &["--compact"]);
    let value = json_of(&output);
    assert_eq!(value["direction"], "TD");
    assert_eq!(value["edges"][0]["cyclic"], true);
    assert_eq!(value["cycles"], serde_json::json!([["A", "B"]]));
}

#[test]
fn test_json_fixture_labels_and_legend() {
    let input = fixture("services.mmd");
    let value = json_of(&run_binary("", &[input.to_str().unwrap()]));
    let nodes = value["nodes"].as_array().unwrap();
    let users = nodes.iter().find(|n| n["id"] == "users").unwrap();
    assert_eq!(users["label"], "Users DB");
    assert_eq!(users["shape"], "cylinder");
    assert_eq!(users["subgraph"], "Core");
    assert_eq!(value["legend"][0]["name"], "Edge");
    assert_eq!(value["legend"][1]["name"], "Core");
    assert!(nodes.iter().all(|n| n["id"] != "utils"));
}

#[test]
fn test_select_adds_highlight() {
    let output = run_binary(
        "graph LR\napi --> service --> db\nsubgraph t\n  utils\nend\n",
        &["--select", "service", "--no-cycles"],
    );
    let value = json_of(&output);
    assert!(value.get("cycles").is_none());
    assert_eq!(
        value["highlight"]["highlighted_nodes"],
        serde_json::json!(["api", "db", "service"])
    );
    assert_eq!(value["highlight"]["dimmed_nodes"], serde_json::json!(["utils"]));
}

#[test]
fn test_output_file() {
    let out_path = std::env::temp_dir().join(format!("mermaid-graph-{}.json", std::process::id()));
    let out_str = out_path.to_str().unwrap();
    let output = run_binary("flowchart LR\na --> b\n", &["-o", out_str]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let written = fs::read_to_string(&out_path).unwrap();
    fs::remove_file(&out_path).ok();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["edges"][0]["source"], "a");
}

#[test]
fn test_unsupported_diagram_exits_with_error() {
    let input = fixture("sequence.mmd");
    let output = run_binary("", &[input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sequenceDiagram"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_file_exits_with_error() {
    let output = run_binary("", &["/nonexistent/diagram.mmd"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read"), "stderr: {stderr}");
}
