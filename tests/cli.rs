//! End-to-end tests for the finboard binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command wired to an isolated config dir with no simulated latency
fn finboard(config_dir: &TempDir) -> Command {
    std::fs::write(
        config_dir.path().join("config.json"),
        r#"{"schema_version":1,"fetch_delay_ms":0}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("finboard").unwrap();
    cmd.env("FINBOARD_DATA_DIR", config_dir.path());
    cmd
}

#[test]
fn dashboard_renders_all_panels() {
    let config_dir = TempDir::new().unwrap();

    finboard(&config_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Metrics"))
        .stdout(predicate::str::contains("Budgets"))
        .stdout(predicate::str::contains("Transactions"))
        .stdout(predicate::str::contains("Total Revenue"))
        .stdout(predicate::str::contains("Client Payment"));
}

#[test]
fn dashboard_shows_undefined_delta_sentinel() {
    let config_dir = TempDir::new().unwrap();

    finboard(&config_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cash on Hand"))
        .stdout(predicate::str::contains("--"))
        .stdout(predicate::str::contains("inf").not())
        .stdout(predicate::str::contains("NaN").not());
}

#[test]
fn transactions_sort_by_amount_ascending() {
    let config_dir = TempDir::new().unwrap();

    let assert = finboard(&config_dir)
        .args(["transactions", "--sort", "amount", "--direction", "asc"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let operations = stdout.find("Office Operations").unwrap();
    let marketing = stdout.find("Marketing Campaign").unwrap();
    let software = stdout.find("Software Subscriptions").unwrap();
    let payment = stdout.find("Client Payment").unwrap();

    assert!(operations < marketing);
    assert!(marketing < software);
    assert!(software < payment);
}

#[test]
fn transactions_limit_truncates_register() {
    let config_dir = TempDir::new().unwrap();

    let assert = finboard(&config_dir)
        .args(["transactions", "--limit", "2"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    // Header + separator + 2 rows
    assert_eq!(stdout.lines().count(), 4);
}

#[test]
fn budgets_marks_over_budget_category() {
    let config_dir = TempDir::new().unwrap();

    finboard(&config_dir)
        .arg("budgets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Travel"))
        .stdout(predicate::str::contains("! "));
}

#[test]
fn export_json_writes_snapshot_file() {
    let config_dir = TempDir::new().unwrap();
    let out_path = config_dir.path().join("snapshot.json");

    finboard(&config_dir)
        .args(["export", "json", "--output"])
        .arg(&out_path)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["schema_version"], 1);
    assert_eq!(parsed["transactions"].as_array().unwrap().len(), 4);
}

#[test]
fn export_csv_to_stdout() {
    let config_dir = TempDir::new().unwrap();

    finboard(&config_dir)
        .args(["export", "csv", "metrics"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "id,title,value,previous_value,change_percent",
        ))
        .stdout(predicate::str::contains("13.6"));
}

#[test]
fn config_command_reports_paths() {
    let config_dir = TempDir::new().unwrap();

    finboard(&config_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings file"))
        .stdout(predicate::str::contains("Fetch delay (ms): 0"));
}
