use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_chain_ruleset(dir: &TempDir) {
    fs::write(
        dir.path().join("chain.json"),
        r#"{
            "facts": ["A"],
            "rules": [
                { "premises": ["A"], "conclusion": "B" },
                { "premises": ["B"], "conclusion": "C" },
                { "premises": ["C"], "conclusion": "D" }
            ]
        }"#,
    )
    .unwrap();
}

#[test]
fn test_cli_infer_derives_chain() {
    let temp_dir = TempDir::new().unwrap();
    write_chain_ruleset(&temp_dir);

    let mut cmd = Command::cargo_bin("horn").unwrap();
    cmd.arg("infer").arg("--dir").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Applied: IF A THEN B"))
        .stdout(predicate::str::contains("Applied: IF B THEN C"))
        .stdout(predicate::str::contains("Applied: IF C THEN D"))
        .stdout(predicate::str::contains("derived"));
}

#[test]
fn test_cli_infer_raw_lists_atoms_one_per_line() {
    let temp_dir = TempDir::new().unwrap();
    write_chain_ruleset(&temp_dir);

    let mut cmd = Command::cargo_bin("horn").unwrap();
    cmd.arg("infer")
        .arg("--raw")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert().success().stdout("A\nB\nC\nD\n");
}

#[test]
fn test_cli_infer_with_extra_facts() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("rules.json"),
        r#"{ "rules": [{ "premises": ["X"], "conclusion": "Y" }] }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("horn").unwrap();
    cmd.arg("infer")
        .arg("X")
        .arg("--raw")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert().success().stdout("X\nY\n");
}

#[test]
fn test_cli_infer_accepts_legacy_if_then_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("legacy.json"),
        r#"{ "facts": ["A"], "rules": [{ "if": ["A"], "then": "B" }] }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("horn").unwrap();
    cmd.arg("infer")
        .arg("--raw")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert().success().stdout("A\nB\n");
}

#[test]
fn test_cli_show_lists_facts_and_rules() {
    let temp_dir = TempDir::new().unwrap();
    write_chain_ruleset(&temp_dir);

    let mut cmd = Command::cargo_bin("horn").unwrap();
    cmd.arg("show").arg("--dir").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Fact"))
        .stdout(predicate::str::contains("IF"))
        .stdout(predicate::str::contains("THEN"));
}

#[test]
fn test_cli_export_merges_workspace() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("one.json"),
        r#"{ "facts": ["A"], "rules": [{ "premises": ["A"], "conclusion": "B" }] }"#,
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("two.json"),
        r#"{ "rules": [{ "premises": ["B"], "conclusion": "C" }] }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("horn").unwrap();
    cmd.arg("export").arg("--dir").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"premises\""))
        .stdout(predicate::str::contains("\"conclusion\""))
        .stdout(predicate::str::contains("\"C\""));
}

#[test]
fn test_cli_invalid_ruleset_reports_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("broken.json"),
        r#"{ "rules": [{ "premises": ["A"], "conclusion": "" }] }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("horn").unwrap();
    cmd.arg("infer").arg("--dir").arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("conclusion must not be empty"));
}
