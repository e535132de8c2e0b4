//! CLI integration tests using the real voicepack binary

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn voicepack_cmd() -> Command {
    Command::cargo_bin("voicepack").unwrap()
}

#[test]
fn test_help_output() {
    voicepack_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Build and release pipeline"))
        .stdout(predicate::str::contains("setup"))
        .stdout(predicate::str::contains("gpu"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("archive"))
        .stdout(predicate::str::contains("clean"));
}

#[test]
fn test_version_output() {
    voicepack_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("voicepack"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_completions_bash() {
    voicepack_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("voicepack"));
}

#[test]
fn test_completions_unknown_shell() {
    voicepack_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_missing_project_directory() {
    let temp = common::TestProject::new();
    let missing = temp.path.join("does-not-exist");
    voicepack_cmd()
        .args(["-p", missing.to_str().unwrap(), "archive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project directory not found"));
}

#[test]
fn test_project_from_env() {
    let temp = common::TestProject::new();
    temp.seed_sources();
    voicepack_cmd()
        .env("VOICEPACK_PROJECT", &temp.path)
        .arg("archive")
        .assert()
        .success();
    let name = temp.path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(temp.exists(&format!("{name}.zip")));
}
