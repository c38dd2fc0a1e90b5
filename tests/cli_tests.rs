use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("moneybook_cli").expect("binary built");
    cmd.env("MONEYBOOK_HOME", home.path());
    cmd
}

#[test]
fn help_lists_the_commands() {
    let home = TempDir::new().expect("tempdir");
    cli(&home)
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("set-budget"))
        .stdout(predicate::str::contains("summary"));
}

#[test]
fn added_expense_shows_up_in_list() {
    let home = TempDir::new().expect("tempdir");
    cli(&home)
        .args(["add", "expense", "12.50", "food", "Lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recorded"));

    cli(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("12.50"));
}

#[test]
fn zero_amount_is_rejected() {
    let home = TempDir::new().expect("tempdir");
    cli(&home)
        .args(["add", "expense", "0", "food", "Nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn unknown_command_fails_with_a_hint() {
    let home = TempDir::new().expect("tempdir");
    cli(&home)
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown command"));
}

#[test]
fn reset_clears_recorded_transactions() {
    let home = TempDir::new().expect("tempdir");
    cli(&home)
        .args(["add", "expense", "7.00", "food", "Coffee"])
        .assert()
        .success();

    cli(&home).args(["reset", "--yes"]).assert().success();

    cli(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("no transactions yet"));
}

#[test]
fn invalid_import_file_leaves_state_untouched() {
    let home = TempDir::new().expect("tempdir");
    cli(&home)
        .args(["add", "expense", "7.00", "food", "Coffee"])
        .assert()
        .success();

    let bad = home.path().join("bad.json");
    fs::write(&bad, "{definitely not json").expect("write bad file");
    cli(&home)
        .args(["import", bad.to_str().expect("utf8 path")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid"));

    cli(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"));
}

#[test]
fn export_then_import_round_trips() {
    let home = TempDir::new().expect("tempdir");
    cli(&home)
        .args(["add", "income", "900", "salary", "Pay"])
        .assert()
        .success();

    let path = home.path().join("backup.json");
    cli(&home)
        .args(["export", path.to_str().expect("utf8 path")])
        .assert()
        .success();

    cli(&home).args(["reset", "--yes"]).assert().success();
    cli(&home)
        .args(["import", path.to_str().expect("utf8 path")])
        .assert()
        .success();

    cli(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pay"));
}

#[test]
fn settings_update_persists_across_invocations() {
    let home = TempDir::new().expect("tempdir");
    cli(&home)
        .args(["settings", "currency", "EUR"])
        .assert()
        .success();

    cli(&home)
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("EUR"));
}
