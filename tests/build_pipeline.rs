mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn build_succeeds_with_complete_workspace() {
    let ctx = TestContext::new();
    ctx.write_full_fixture();

    ctx.cli()
        .args(["build"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found build for version: v0"))
        .stdout(predicate::str::contains("Tauri configuration validated (frontendDist: ../dist)"))
        .stdout(predicate::str::contains("completed successfully"));

    assert_eq!(ctx.read_root_index(), "<html>desktop entry</html>");
    assert!(ctx.root().join("dist/index-cv.html").exists());
}

#[cfg(unix)]
#[test]
fn build_command_receives_desktop_mode_flag() {
    let ctx = TestContext::new();
    ctx.write_full_fixture();
    ctx.write_settings("printf %s \\\"$DESKTOP_MODE\\\" > desktop_mode.txt");

    ctx.cli().args(["build"]).assert().success();

    let flag = fs::read_to_string(ctx.root().join("desktop_mode.txt")).unwrap();
    assert_eq!(flag, "true");
}

#[cfg(unix)]
#[test]
fn build_can_produce_the_dist_tree_itself() {
    let ctx = TestContext::new();
    ctx.write_entry_point();
    ctx.write_tauri_conf(Some("../dist"));
    ctx.write_settings(
        "mkdir -p dist/simulatorvue/v1 && echo built > dist/simulatorvue/v1/index.html",
    );

    ctx.cli()
        .args(["build"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found build for version: v1"));
}

#[cfg(unix)]
#[test]
fn build_fails_when_command_fails() {
    let ctx = TestContext::new();
    ctx.write_full_fixture();
    ctx.write_settings("echo boom >&2; exit 2");

    ctx.cli()
        .args(["build"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error executing command"))
        .stderr(predicate::str::contains("boom"));
}

#[test]
fn build_fails_when_no_versioned_build_exists() {
    let ctx = TestContext::new();
    ctx.write_settings("true");
    ctx.write_entry_point();
    ctx.write_tauri_conf(Some("../dist"));

    ctx.cli()
        .args(["build"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No valid build output found"))
        .stderr(predicate::str::contains("v0"))
        .stderr(predicate::str::contains("v1"));
}

#[test]
fn build_fails_when_entry_point_missing() {
    let ctx = TestContext::new();
    ctx.write_full_fixture();
    fs::remove_file(ctx.root().join("index-cv.html")).unwrap();

    ctx.cli()
        .args(["build"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Entry point not found"));
}

#[test]
fn build_fails_when_tauri_config_missing() {
    let ctx = TestContext::new();
    ctx.write_full_fixture();
    fs::remove_file(ctx.root().join("src-tauri/tauri.conf.json")).unwrap();

    ctx.cli()
        .args(["build"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Tauri configuration not found"));
}

#[test]
fn build_fails_before_resolution_when_frontend_dist_not_configured() {
    let ctx = TestContext::new();
    ctx.write_full_fixture();
    ctx.write_tauri_conf(None);

    ctx.cli()
        .args(["build"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("frontendDist not configured"));
}

#[test]
fn build_fails_when_frontend_dist_path_missing() {
    let ctx = TestContext::new();
    ctx.write_full_fixture();
    ctx.write_tauri_conf(Some("../missing-dist"));

    ctx.cli()
        .args(["build"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Frontend dist path '../missing-dist' does not exist"));
}

#[test]
fn frontend_dist_resolves_relative_to_config_file() {
    let ctx = TestContext::new();
    ctx.write_full_fixture();
    // dist/ exists under the project root; the reference only works if it is
    // resolved against src-tauri/, not the working directory.
    ctx.write_tauri_conf(Some("../dist"));

    ctx.cli().args(["build"]).assert().success();

    ctx.write_tauri_conf(Some("dist"));
    ctx.cli()
        .args(["build"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn dry_run_executes_nothing() {
    let ctx = TestContext::new();
    ctx.write_settings("touch ran.txt");

    ctx.cli()
        .args(["build", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("touch ran.txt"));

    assert!(!ctx.root().join("ran.txt").exists());
    assert!(!ctx.root().join("dist").exists());
}

#[test]
fn explicit_config_path_is_required_to_exist() {
    let ctx = TestContext::new();
    ctx.write_full_fixture();

    ctx.cli()
        .args(["build", "--config", "other.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("settings file not found"));
}

#[test]
fn invalid_settings_file_is_rejected() {
    let ctx = TestContext::new();
    ctx.write_full_fixture();
    fs::write(ctx.root().join("deskbuild.toml"), "[build]\nversions = []\n").unwrap();

    ctx.cli()
        .args(["build"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid deskbuild.toml"));
}
