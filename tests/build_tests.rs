//! Executable packager integration tests
//!
//! Freezing needs PyInstaller inside a real environment; covered here are
//! the precondition contracts and the dry-run invocation.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn voicepack_cmd() -> Command {
    Command::cargo_bin("voicepack").unwrap()
}

#[test]
fn test_build_requires_entry_point() {
    let project = common::TestProject::new();
    project.seed_venv();

    voicepack_cmd()
        .current_dir(&project.path)
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application entry point not found"))
        .stderr(predicate::str::contains("voice_app.py"));
}

#[test]
fn test_build_requires_provisioned_environment() {
    let project = common::TestProject::new();
    project.write_file("voice_app.py", "print('app')");

    voicepack_cmd()
        .current_dir(&project.path)
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Isolated environment not found"));
}

#[test]
fn test_build_dry_run_prints_invocation() {
    let project = common::TestProject::new();
    project.write_file("voice_app.py", "print('app')");
    project.seed_venv();

    voicepack_cmd()
        .current_dir(&project.path)
        .args(["build", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PyInstaller"))
        .stdout(predicate::str::contains("--onedir"))
        .stdout(predicate::str::contains("--hidden-import customtkinter"))
        .stdout(predicate::str::contains("--collect-all faster_whisper"))
        .stdout(predicate::str::contains("voice_app.py"));
}

#[test]
fn test_build_dry_run_onefile_flag() {
    let project = common::TestProject::new();
    project.write_file("voice_app.py", "print('app')");
    project.seed_venv();

    voicepack_cmd()
        .current_dir(&project.path)
        .args(["build", "--onefile", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--onefile"));
}

#[test]
fn test_build_dry_run_lists_staged_libraries() {
    let project = common::TestProject::new();
    project.write_file("voice_app.py", "print('app')");
    project.seed_venv();
    project.write_file("cuda_dlls/cublas64_12.dll", "dll");
    project.write_file("cuda_dlls/staging.json", "{}");

    voicepack_cmd()
        .current_dir(&project.path)
        .args(["build", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--add-binary"))
        .stdout(predicate::str::contains("cublas64_12.dll"))
        // The staging report is data, not a library to bundle
        .stdout(predicate::str::contains("staging.json").not());
}

#[test]
fn test_build_dry_run_does_not_remove_prior_output() {
    let project = common::TestProject::new();
    project.write_file("voice_app.py", "print('app')");
    project.seed_venv();
    project.write_file("build/leftover.txt", "old");
    project.write_file("dist/VoiceTools/old.exe", "old");

    voicepack_cmd()
        .current_dir(&project.path)
        .args(["build", "--dry-run"])
        .assert()
        .success();

    assert!(project.exists("build/leftover.txt"));
    assert!(project.exists("dist/VoiceTools/old.exe"));
}
