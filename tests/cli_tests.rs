//! End-to-end tests for the finreport binary

use assert_cmd::Command;
use chrono::NaiveDate;
use predicates::prelude::*;
use tempfile::TempDir;

use finreport::config::FinreportPaths;
use finreport::models::{Expense, ExpenseCategory, ExpenseKind, Income, Money};
use finreport::storage::Storage;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn finreport(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finreport").unwrap();
    cmd.env("FINREPORT_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

/// Store a small ledger: one customer, COGS under a parent, OPEX and CAPEX
fn seed_ledger() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let paths = FinreportPaths::with_base_dir(temp_dir.path().to_path_buf());
    let storage = Storage::new(paths).unwrap();

    let materials = ExpenseCategory::new("Materials");
    let raw = ExpenseCategory::new_child("Raw Materials", materials.id);
    let rent = ExpenseCategory::new("Rent");
    let machinery = ExpenseCategory::new("Machinery");

    storage
        .income
        .upsert(Income::new(
            "INV-1",
            date(2025, 1, 15),
            "Acme",
            Money::from_minor(15_000_000),
            Money::from_minor(1_050_000),
            "Bkk",
        ))
        .unwrap();
    storage
        .income
        .upsert(Income::new(
            "INV-2",
            date(2025, 2, 15),
            "Other Branch Customer",
            Money::from_minor(999_900),
            Money::zero(),
            "Hkt",
        ))
        .unwrap();

    let expenses = [
        ("E-1", date(2025, 1, 5), ExpenseKind::Cogs, raw.id, 3_000_000),
        ("E-2", date(2025, 2, 5), ExpenseKind::Opex, rent.id, 5_000_000),
        ("E-3", date(2025, 3, 5), ExpenseKind::Capex, machinery.id, 2_000_000),
    ];
    for (no, day, kind, category, amount) in expenses {
        storage
            .expenses
            .upsert(Expense::new(
                no,
                day,
                kind,
                category,
                Money::from_minor(amount),
                Money::zero(),
                "Bkk",
            ))
            .unwrap();
    }

    for category in [materials, raw, rent, machinery] {
        storage.categories.upsert(category).unwrap();
    }
    storage.save_all().unwrap();

    temp_dir
}

#[test]
fn test_help() {
    let temp_dir = TempDir::new().unwrap();
    finreport(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"));
}

#[test]
fn test_init_creates_store() {
    let temp_dir = TempDir::new().unwrap();
    finreport(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    assert!(temp_dir.path().join("config.json").exists());
    assert!(temp_dir.path().join("data").join("categories.json").exists());

    finreport(&temp_dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost of Sales"))
        .stdout(predicate::str::contains("Raw Materials"));
}

#[test]
fn test_pnl_json_yearly() {
    let temp_dir = seed_ledger();
    let output = finreport(&temp_dir)
        .args([
            "report", "pnl", "--start", "01/01/2025", "--end", "31/12/2025", "--location", "Bkk",
            "--emit", "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["report_info"]["periods"], serde_json::json!(["Total"]));
    assert_eq!(report["report_info"]["location"], "Bkk");
    assert_eq!(report["revenue"]["total_net_revenue"]["Total"], 150_000.0);
    assert_eq!(report["gross_profit"]["Total"], 120_000.0);
    assert_eq!(report["ebit"]["Total"], 70_000.0);
    assert_eq!(report["income_tax"]["Total"], 10_500.0);
    assert_eq!(report["net_earnings"]["Total"], 59_500.0);
    assert!(report["revenue"]["revenue_by_customer"]
        .get("Other Branch Customer")
        .is_none());
    assert_eq!(
        report["cogs"]["expenses_by_category"]["Materials"]["subcategories"]["Raw Materials"]["Total"],
        30_000.0
    );
}

#[test]
fn test_cashflow_monthly_balances() {
    let temp_dir = seed_ledger();
    let output = finreport(&temp_dir)
        .args([
            "report",
            "cashflow",
            "--start",
            "01/01/2025",
            "--end",
            "31/03/2025",
            "--format",
            "monthly",
            "--location",
            "Bkk",
            "--opening-balance",
            "1000",
            "--emit",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        report["report_info"]["periods"],
        serde_json::json!(["jan-25", "feb-25", "mar-25"])
    );
    assert_eq!(report["cash_inflows"]["sales_income"]["jan-25"], 160_500.0);
    assert_eq!(report["net_cashflow"]["jan-25"], 130_500.0);
    assert_eq!(report["opening_balance"]["jan-25"], 1_000.0);
    assert_eq!(report["closing_balance"]["jan-25"], 131_500.0);
    assert_eq!(report["opening_balance"]["feb-25"], 131_500.0);
    assert_eq!(report["closing_balance"]["feb-25"], 81_500.0);
    assert_eq!(report["closing_balance"]["mar-25"], 61_500.0);
}

#[test]
fn test_table_output() {
    let temp_dir = seed_ledger();
    finreport(&temp_dir)
        .args(["report", "pnl", "-s", "01/01/2025", "-e", "31/03/2025", "-f", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profit & Loss"))
        .stdout(predicate::str::contains("jan-25"))
        .stdout(predicate::str::contains("Net Earnings"));
}

#[test]
fn test_csv_output() {
    let temp_dir = seed_ledger();
    finreport(&temp_dir)
        .args([
            "report", "cashflow", "--start", "01/01/2025", "--end", "31/03/2025", "--emit", "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Section,Category,Subcategory,Line,Total"))
        .stdout(predicate::str::contains("CAPEX,Machinery,,Machinery,20000.00"));
}

#[test]
fn test_range_too_long_is_rejected() {
    let temp_dir = seed_ledger();
    finreport(&temp_dir)
        .args(["report", "pnl", "--start", "01/01/2024", "--end", "01/02/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot exceed 12 months"));
}

#[test]
fn test_invalid_format_is_rejected() {
    let temp_dir = seed_ledger();
    finreport(&temp_dir)
        .args([
            "report", "pnl", "--start", "01/01/2025", "--end", "31/01/2025", "--format", "weekly",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Must be 'yearly' or 'monthly'"));
}

#[test]
fn test_invalid_date_is_rejected() {
    let temp_dir = seed_ledger();
    finreport(&temp_dir)
        .args(["report", "pnl", "--start", "2025-01-01", "--end", "31/01/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid start_date: '2025-01-01'"))
        .stderr(predicate::str::contains("DD/MM/YYYY"));
}
