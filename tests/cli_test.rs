/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{StoreBuilder, realistic_store, scenario_a_store};
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_snapraid-history"));
    cmd.env_remove("SNAPRAID_OUTPUT_DIR").env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_cli_overview_table() {
    let store = scenario_a_store();

    cmd()
        .arg("--output-dir")
        .arg(store.path())
        .arg("overview")
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-01-02 00:00:00"))
        .stdout(predicate::str::contains("2023-01-01 00:00:00"))
        .stdout(predicate::str::contains("Smart"))
        .stdout(predicate::str::contains("2 runs"));
}

#[test]
fn test_cli_overview_json() {
    let store = scenario_a_store();

    let output = cmd().arg("-o").arg(store.path()).args(["overview", "--json"]).output().unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["id"], "2023-01-02T00:00:00Z");
    assert_eq!(rows[0]["total_changes"], 0);
    assert_eq!(rows[1]["total_changes"], 4);
}

#[test]
fn test_cli_overview_empty_store() {
    let store = StoreBuilder::new().build();

    cmd()
        .arg("-o")
        .arg(store.path())
        .arg("overview")
        .assert()
        .success()
        .stdout(predicate::str::contains("No runs found in"));
}

#[test]
fn test_cli_output_dir_from_env() {
    let store = scenario_a_store();

    cmd()
        .env("SNAPRAID_OUTPUT_DIR", store.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-01-01T00:00:00Z"))
        .stdout(predicate::str::contains("2023-01-02T00:00:00Z"));
}

#[test]
fn test_cli_run_latest() {
    let store = realistic_store();

    cmd()
        .arg("-o")
        .arg(store.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Run 2024-05-03T03:00:00Z"))
        .stdout(predicate::str::contains("Copied (3)"))
        .stdout(predicate::str::contains("Restored (1)"))
        .stdout(predicate::str::contains("* 2024-05-03T03:00:00Z"));
}

#[test]
fn test_cli_run_by_id_json() {
    let store = realistic_store();

    let output = cmd()
        .arg("-o")
        .arg(store.path())
        .args(["run", "--id", "2024-05-01T03:00:00Z", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["run"]["id"], "2024-05-01T03:00:00Z");
    assert_eq!(doc["run"]["changes"]["added"].as_array().unwrap().len(), 12);
    assert_eq!(doc["runs"].as_array().unwrap().len(), 3);
}

#[test]
fn test_cli_run_not_found_exit_code() {
    let store = scenario_a_store();

    cmd()
        .arg("-o")
        .arg(store.path())
        .args(["run", "--id", "bogus"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("2023-01-02T00:00:00Z"));
}

#[test]
fn test_cli_run_empty_store_exit_code() {
    let store = StoreBuilder::new().build();

    cmd().arg("-o").arg(store.path()).arg("run").assert().code(2);
}

#[test]
fn test_cli_corrupt_snapshot_exit_code() {
    let store = StoreBuilder::new().with_file("2023-01-01T00:00:00Z.json", "{ broken").build();

    cmd().arg("-o").arg(store.path()).arg("overview").assert().code(1);
    cmd().arg("-o").arg(store.path()).arg("run").assert().code(1);
}

#[test]
fn test_cli_no_command_shows_help_message() {
    cmd().assert().success().stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Browse the history of SnapRAID maintenance runs"))
        .stdout(predicate::str::contains("overview"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn test_cli_version_flag() {
    cmd().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    cmd().arg("invalid-command").assert().failure();
}
