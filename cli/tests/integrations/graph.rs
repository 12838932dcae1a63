use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_graph_emits_dot() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("rules.json"),
        r#"{ "rules": [
            { "premises": ["A", "B"], "conclusion": "C" },
            { "premises": ["C"], "conclusion": "D" }
        ] }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("horn").unwrap();
    cmd.arg("graph").arg("--dir").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("digraph rules {"))
        .stdout(predicate::str::contains("\"A\" -> \"C\";"))
        .stdout(predicate::str::contains("\"B\" -> \"C\";"))
        .stdout(predicate::str::contains("\"C\" -> \"D\";"));
}

#[test]
fn test_cli_graph_writes_to_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("rules.json"),
        r#"{ "rules": [{ "premises": ["A"], "conclusion": "B" }] }"#,
    )
    .unwrap();
    let out_path = temp_dir.path().join("rules.dot");

    let mut cmd = Command::cargo_bin("horn").unwrap();
    cmd.arg("graph")
        .arg("--dir")
        .arg(temp_dir.path())
        .arg("--output")
        .arg(&out_path);

    cmd.assert().success();
    let dot = fs::read_to_string(&out_path).unwrap();
    assert!(dot.contains("\"A\" -> \"B\";"));
}
