//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("gymctl").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Port to listen on"))
        .stdout(predicate::str::contains("PORT"));
}

#[test]
fn test_plans_help() {
    let mut cmd = Command::cargo_bin("gymctl").unwrap();
    cmd.arg("plans").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_serve_requires_database_url() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("gymctl").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("DATABASE_URL")
        .arg("serve");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("gymctl").unwrap();
    cmd.arg("nope");

    cmd.assert().failure();
}
