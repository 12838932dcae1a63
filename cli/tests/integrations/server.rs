use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_server_help() {
    let mut cmd = Command::cargo_bin("horn").unwrap();
    cmd.arg("server").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("HTTP"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--port"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("horn").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("horn"));
}
