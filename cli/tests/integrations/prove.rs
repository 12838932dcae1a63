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
fn test_cli_prove_goal_at_end_of_chain() {
    let temp_dir = TempDir::new().unwrap();
    write_chain_ruleset(&temp_dir);

    let mut cmd = Command::cargo_bin("horn").unwrap();
    cmd.arg("prove").arg("D").arg("--dir").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Goal 'D' proved."))
        .stdout(predicate::str::contains("Trying rule: IF C THEN D"))
        .stdout(predicate::str::contains("Goal 'A' is already known."));
}

#[test]
fn test_cli_prove_unprovable_goal_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("rules.json"),
        r#"{ "rules": [{ "premises": ["X"], "conclusion": "Y" }] }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("horn").unwrap();
    cmd.arg("prove").arg("Y").arg("--dir").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Goal 'Y' cannot be proven."));
}

#[test]
fn test_cli_prove_raw_prints_boolean() {
    let temp_dir = TempDir::new().unwrap();
    write_chain_ruleset(&temp_dir);

    let mut cmd = Command::cargo_bin("horn").unwrap();
    cmd.arg("prove")
        .arg("D")
        .arg("--raw")
        .arg("--dir")
        .arg(temp_dir.path());
    cmd.assert().success().stdout("true\n");

    let mut cmd = Command::cargo_bin("horn").unwrap();
    cmd.arg("prove")
        .arg("Z")
        .arg("--raw")
        .arg("--dir")
        .arg(temp_dir.path());
    cmd.assert().success().stdout("false\n");
}

#[test]
fn test_cli_prove_with_extra_facts() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("rules.json"),
        r#"{ "rules": [{ "premises": ["X"], "conclusion": "Y" }] }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("horn").unwrap();
    cmd.arg("prove")
        .arg("Y")
        .arg("X")
        .arg("--raw")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert().success().stdout("true\n");
}

#[test]
fn test_cli_prove_first_match_policy() {
    // Backward chaining commits to the first rule concluding Z even
    // though the second would succeed.
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("rules.json"),
        r#"{
            "facts": ["Q"],
            "rules": [
                { "premises": ["P"], "conclusion": "Z" },
                { "premises": ["Q"], "conclusion": "Z" }
            ]
        }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("horn").unwrap();
    cmd.arg("prove")
        .arg("Z")
        .arg("--raw")
        .arg("--dir")
        .arg(temp_dir.path());
    cmd.assert().success().stdout("false\n");
}
