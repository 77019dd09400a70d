//! End-to-end CLI tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with config isolated to a temp directory
fn campus_budget(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("campus-budget").unwrap();
    cmd.env("CAMPUS_BUDGET_DATA_DIR", config_dir.path());
    cmd.env_remove("GEMINI_API_KEY");
    cmd
}

#[test]
fn summary_prints_metrics_and_status() {
    let dir = TempDir::new().unwrap();
    campus_budget(&dir)
        .args([
            "summary",
            "--mode",
            "monthly",
            "--budget",
            "5000",
            "--goal",
            "1000",
            "--set",
            "Food=2000",
            "--set",
            "Transport=500",
            "--set",
            "Rent/Hostel=1500",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget:    ₹5000.00"))
        .stdout(predicate::str::contains("Expenses:  ₹4000.00"))
        .stdout(predicate::str::contains("Remaining: ₹1000.00"))
        .stdout(predicate::str::contains("Daily spending allowance: ₹166.67"))
        .stdout(predicate::str::contains("You're on track!"));
}

#[test]
fn summary_flags_exceeded_budget() {
    let dir = TempDir::new().unwrap();
    campus_budget(&dir)
        .args([
            "summary",
            "--mode",
            "semester",
            "--budget",
            "50000",
            "--set",
            "Tuition Fees=40000",
            "--set",
            "Hostel/PG Rent=12000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining: -₹2000.00"))
        .stdout(predicate::str::contains("You exceeded your budget!"));
}

#[test]
fn summary_hides_equivalent_for_zero_budget() {
    let dir = TempDir::new().unwrap();
    campus_budget(&dir)
        .args(["summary", "--mode", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily spending allowance").not());
}

#[test]
fn summary_save_writes_csv() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("expenses.csv");
    campus_budget(&dir)
        .args([
            "summary",
            "--budget",
            "5000",
            "--set",
            "Food=2000",
            "--save",
        ])
        .arg(&out)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Date,Mode,Budget,Expenses,Remaining,Goal"
    );
    let row = lines.next().unwrap();
    assert!(row.contains("Monthly"));
    assert!(row.contains("5000.00"));
    assert!(row.contains("3000.00"));
}

#[test]
fn summary_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();
    campus_budget(&dir)
        .args(["summary", "--budget", "5000", "--set", "Tuition Fees=100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn summary_rejects_negative_amount() {
    let dir = TempDir::new().unwrap();
    campus_budget(&dir)
        .args(["summary", "--budget", "5000", "--set", "Food=-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be negative"));
}

#[test]
fn categories_lists_both_sets() {
    let dir = TempDir::new().unwrap();
    campus_budget(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly categories:"))
        .stdout(predicate::str::contains("Semester categories:"))
        .stdout(predicate::str::contains("Daily meals, snacks, canteen"))
        .stdout(predicate::str::contains("Tuition Fees"));
}

#[test]
fn tips_without_credential_warns_and_succeeds() {
    let dir = TempDir::new().unwrap();
    campus_budget(&dir)
        .args(["tips", "--budget", "5000", "--set", "Food=2000"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not configured"));
}

#[test]
fn config_shows_paths_and_settings() {
    let dir = TempDir::new().unwrap();
    campus_budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default mode:    Monthly"))
        .stdout(predicate::str::contains("Advice key:      not configured"));
}
