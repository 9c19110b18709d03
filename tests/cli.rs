//! End-to-end tests for the fintrack binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", dir.path())
        .env_remove("RUST_LOG")
        .env_remove("FINTRACK_LOG");
    cmd
}

fn add(dir: &TempDir, amount: &str, category: &str, date: &str) -> assert_cmd::assert::Assert {
    fintrack(dir)
        .args(["add", amount, "--category", category, "--date", date])
        .assert()
}

#[test]
fn records_expenses_and_tracks_budget() {
    let dir = TempDir::new().unwrap();

    add(&dir, "200", "Food", "2024-05-01")
        .success()
        .stdout(predicate::str::contains("Expense added successfully"))
        .stdout(predicate::str::contains("Current balance: $800.00"));

    fintrack(&dir)
        .args(["dashboard", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Balance:   $800.00"))
        .stdout(predicate::str::contains("Total Spent:       $200.00"))
        .stdout(predicate::str::contains("Remaining Budget:  $800.00 (Under Budget)"));

    add(&dir, "850", "Shopping", "2024-05-02").success();

    fintrack(&dir)
        .args(["dashboard", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Balance:   -$50.00"))
        .stdout(predicate::str::contains("Total Spent:       $1050.00"))
        .stdout(predicate::str::contains("Over Budget!"))
        .stdout(predicate::str::contains("exceeded your monthly budget by $50.00"));

    let csv = fs::read_to_string(dir.path().join("data").join("expenses.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Date,Amount,Category,Description,Currency"));
    assert_eq!(lines.next(), Some("2024-05-01,200.00,Food,,USD"));
    assert_eq!(lines.next(), Some("2024-05-02,850.00,Shopping,,USD"));
}

#[test]
fn zero_amount_records_nothing() {
    let dir = TempDir::new().unwrap();

    add(&dir, "0", "Food", "2024-05-01")
        .success()
        .stdout(predicate::str::contains("No expense was recorded"));

    fintrack(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet"));

    fintrack(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1000.00"));
}

#[test]
fn invalid_input_is_reported() {
    let dir = TempDir::new().unwrap();

    add(&dir, "ten", "Food", "2024-05-01")
        .failure()
        .stderr(predicate::str::contains("Invalid amount format"));

    add(&dir, "10", "Groceries", "2024-05-01")
        .failure()
        .stderr(predicate::str::contains("Unknown category"));

    add(&dir, "10", "Food", "May 1st")
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));

    add(&dir, "0.004", "Food", "2024-05-01")
        .failure()
        .stderr(predicate::str::contains("at most two decimal places"));
    assert!(!dir.path().join("data").join("expenses.csv").exists());
}

#[test]
fn stored_amounts_keep_their_precision() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("expenses.csv"),
        "Date,Amount,Category,Description,Currency\n2024-05-01,12.345,Food,,USD\n2024-05-02,0.004,Other,,USD\n",
    )
    .unwrap();

    add(&dir, "1.50", "Food", "2024-05-03").success();

    let csv = fs::read_to_string(data.join("expenses.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Date,Amount,Category,Description,Currency",
            "2024-05-01,12.345,Food,,USD",
            "2024-05-02,0.004,Other,,USD",
            "2024-05-03,1.50,Food,,USD",
        ]
    );
}

#[test]
fn initial_balance_locks_after_confirm() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir).args(["budget", "balance", "500"]).assert().success();
    fintrack(&dir)
        .args(["budget", "confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initial balance set!"));

    fintrack(&dir)
        .args(["budget", "balance", "900"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("locked"));

    fintrack(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$500.00 (confirmed)"));
}

#[test]
fn currency_applies_to_new_expenses() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir).args(["budget", "currency", "EUR"]).assert().success();
    add(&dir, "12.50", "Transportation", "2024-05-03").success();

    fintrack(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("€12.50"))
        .stdout(predicate::str::contains("EUR"));
}

#[test]
fn legacy_file_without_currency_loads_as_usd() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("expenses.csv"),
        "Date,Amount,Category,Description\n2024-05-01,20.0,Food,Lunch\n",
    )
    .unwrap();

    fintrack(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("USD"));
}

#[test]
fn corrupt_file_still_shows_dashboard() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("expenses.csv"), "Date,Amount\ngarbage,???\n").unwrap();

    fintrack(&dir)
        .args(["dashboard", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded this month."));

    // Appending must not overwrite the unreadable file
    add(&dir, "5", "Food", "2024-05-01").failure();
    assert_eq!(
        fs::read_to_string(data.join("expenses.csv")).unwrap(),
        "Date,Amount\ngarbage,???\n"
    );
}

#[test]
fn corrupt_session_falls_back_to_defaults_for_display() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("session.json"), "{ not json").unwrap();

    fintrack(&dir)
        .args(["dashboard", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Budget:    $1000.00"));
}

#[test]
fn dashboard_json_output() {
    let dir = TempDir::new().unwrap();
    add(&dir, "850", "Housing", "2024-05-10").success();

    let output = fintrack(&dir)
        .args(["dashboard", "--month", "2024-05", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["total_spent"], "850.00");
    assert_eq!(json["summary"]["status"]["status"], "warning");
    assert_eq!(json["summary"]["status"]["amount"], "150.00");
    assert_eq!(json["categories"][0]["category"], "Housing");
}

#[test]
fn config_writes_default_settings() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Date format: %Y-%m-%d"));

    let written = fs::read_to_string(dir.path().join("config.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["log_level"], "warn");
}

#[test]
fn lists_categories() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entertainment"));
}
