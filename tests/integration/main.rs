//! Integration tests for the typegraph CLI
//!
//! Each test writes a code-model document to a temp directory and runs
//! the compiled binary against it.

use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::json;
use tempfile::TempDir;

fn write_model(dir: &TempDir, value: serde_json::Value) -> PathBuf {
    let path = dir.path().join("model.json");
    std::fs::write(&path, serde_json::to_vec_pretty(&value).unwrap()).unwrap();
    path
}

fn typegraph(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_typegraph"))
        .args(args)
        .output()
        .expect("failed to run typegraph")
}

/// A has a field of type B; B implements I; a string field stays
/// external.
fn sample_model() -> serde_json::Value {
    json!({
        "entry_root": "App.A",
        "types": [
            {
                "name": "App.A",
                "fields": [
                    { "name": "b", "type": "App.B" },
                    { "name": "text", "type": "System.String" }
                ]
            },
            {
                "name": "App.B",
                "interfaces": ["App.I"]
            },
            {
                "name": "App.I",
                "kind": "interface"
            }
        ]
    })
}

#[test]
fn help_shows_usage() {
    let output = typegraph(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("typegraph"));
    assert!(stdout.contains("--format"));
}

#[test]
fn graphviz_end_to_end() {
    let dir = TempDir::new().unwrap();
    let model = write_model(&dir, sample_model());

    let output = typegraph(&[
        model.to_str().unwrap(),
        "--members",
        "--interfaces",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = "\
digraph dependencies {
    splines = polyline
    edge [color = lightgray]
    \"App.A\" [label = \"A\"]
    \"App.A\" -> \"App.B\"
    \"App.B\" [label = \"B\"]
    \"App.B\" -> \"App.I\"
    \"App.I\" -> \"App.B\"
    \"App.I\" [label = \"I\"]
}
";
    assert_eq!(stdout, expected);
}

#[test]
fn mermaid_end_to_end() {
    let dir = TempDir::new().unwrap();
    let model = write_model(&dir, sample_model());

    let output = typegraph(&[
        model.to_str().unwrap(),
        "--format",
        "mermaid",
        "--members",
        "--interfaces",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = "\
```mermaid
flowchart TD
    App_A[A]
    App_A --> App_B
    App_B[B]
    App_B --> App_I
    App_I --> App_B
    App_I[I]
```
";
    assert_eq!(stdout, expected);
}

#[test]
fn no_relationship_flags_follow_everything() {
    let dir = TempDir::new().unwrap();
    let model = write_model(&dir, sample_model());

    let output = typegraph(&[model.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["App.A", "App.B", "App.I"] {
        assert!(stdout.contains(name), "{name} missing from output");
    }
    // external types never show up
    assert!(!stdout.contains("System.String"));
}

#[test]
fn exclusion_removes_nodes_and_edges() {
    let dir = TempDir::new().unwrap();
    let model = write_model(&dir, sample_model());

    let output = typegraph(&[
        model.to_str().unwrap(),
        "--members",
        "--interfaces",
        "--exclude",
        "App.B",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"App.A\""));
    assert!(!stdout.contains("App.B"));
    // I was only reachable through B
    assert!(!stdout.contains("App.I"));
}

#[test]
fn root_override_changes_the_starting_point() {
    let dir = TempDir::new().unwrap();
    let model = write_model(&dir, sample_model());

    let output = typegraph(&[
        model.to_str().unwrap(),
        "--root",
        "App.B",
        "--members",
        "--interfaces",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("\"App.A\""));
    assert!(stdout.contains("\"App.B\""));
}

#[test]
fn unresolvable_root_fails_before_emitting() {
    let dir = TempDir::new().unwrap();
    let model = write_model(&dir, sample_model());

    let output = typegraph(&[model.to_str().unwrap(), "--root", "App.Missing"]);
    assert!(!output.status.success());
    // nothing was streamed, not even a header
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("App.Missing"));
}

#[test]
fn unreadable_model_fails() {
    let output = typegraph(&["/nonexistent/model.json"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
