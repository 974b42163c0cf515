//! End-to-end CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tipledger(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tipledger").expect("binary not found");
    cmd.env("NO_COLOR", "1")
        .env_remove("TIPLEDGER_KEY")
        .env_remove("RUST_LOG")
        .arg("--store")
        .arg(store);
    cmd
}

fn store_in(dir: &TempDir) -> PathBuf {
    dir.path().join("storage.json")
}

fn stored_snapshot(path: &Path) -> String {
    let content = std::fs::read_to_string(path).unwrap();
    let items: serde_json::Value = serde_json::from_str(&content).unwrap();
    items["tip_counter_tips"].as_str().unwrap().to_string()
}

#[test]
fn help_flag() {
    Command::cargo_bin("tipledger")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tips"));
}

#[test]
fn version_flag() {
    Command::cargo_bin("tipledger")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tipledger"));
}

#[test]
fn empty_ledger_lists_hint() {
    let dir = TempDir::new().unwrap();
    tipledger(&store_in(&dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("No tips yet"))
        .stdout(predicate::str::contains("Total: $0.00"));
}

#[test]
fn add_then_total() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    tipledger(&store).args(["add", "2.5"]).assert().success();
    tipledger(&store)
        .args(["add", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0  $3.00"))
        .stdout(predicate::str::contains("1  $2.50"));

    tipledger(&store)
        .arg("total")
        .assert()
        .success()
        .stdout("$5.50\n");
    tipledger(&store)
        .args(["total", "-q"])
        .assert()
        .success()
        .stdout("5.50\n");

    assert_eq!(stored_snapshot(&store), "[3,2.5]");
}

#[test]
fn rejected_add_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    tipledger(&store).args(["add", "4"]).assert().success();

    for bad in ["abc", "-5", "0", ""] {
        tipledger(&store)
            .args(["add", bad])
            .assert()
            .code(2)
            .stdout("");
    }

    assert_eq!(stored_snapshot(&store), "[4]");
}

#[test]
fn rejected_add_on_fresh_store_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    tipledger(&store).args(["add", "nope"]).assert().code(2);
    assert!(!store.exists());
}

#[test]
fn delete_by_position() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::write(&store, r#"{"tip_counter_tips":"[1,2.5,3]"}"#).unwrap();

    tipledger(&store)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 tip"))
        .stdout(predicate::str::contains("Total: $4.00"));

    assert_eq!(stored_snapshot(&store), "[1,3]");
}

#[test]
fn clear_with_yes() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    tipledger(&store).args(["add", "7"]).assert().success();

    tipledger(&store)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared all tips"));

    assert_eq!(stored_snapshot(&store), "[]");
}

#[test]
fn clear_declined_keeps_entries() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    tipledger(&store).args(["add", "7"]).assert().success();

    tipledger(&store)
        .arg("clear")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $7.00"));

    assert_eq!(stored_snapshot(&store), "[7]");
}

#[test]
fn corrupt_snapshot_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::write(&store, r#"{"tip_counter_tips":"not json"}"#).unwrap();

    tipledger(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tips yet"));
}

#[test]
fn separate_keys_are_independent() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    tipledger(&store).args(["add", "1"]).assert().success();
    tipledger(&store)
        .args(["--key", "other", "add", "9"])
        .assert()
        .success();

    tipledger(&store)
        .arg("total")
        .assert()
        .stdout("$1.00\n");
    tipledger(&store)
        .args(["--key", "other", "total"])
        .assert()
        .stdout("$9.00\n");
}

#[test]
fn unwritable_store_exits_with_storage_code() {
    let dir = TempDir::new().unwrap();
    // A directory cannot be read or written as a store file.
    tipledger(dir.path())
        .args(["add", "5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("[ERROR]"));
}

#[test]
fn shell_reads_commands_from_stdin() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    tipledger(&store)
        .arg("shell")
        .write_stdin("2.5\n3\ndel 0\ntotal\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 tip"))
        .stdout(predicate::str::contains("$2.50\n"));

    assert_eq!(stored_snapshot(&store), "[2.5]");
}

#[test]
fn completion_bash() {
    Command::cargo_bin("tipledger")
        .unwrap()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tipledger"));
}

#[test]
fn invalid_arguments_exit_with_config_code() {
    let dir = TempDir::new().unwrap();
    tipledger(&store_in(&dir))
        .arg("frobnicate")
        .assert()
        .code(4);
    tipledger(&store_in(&dir))
        .args(["delete", "first"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid value"));
}
