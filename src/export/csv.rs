//! CSV Export functionality
//!
//! Flattens a statement into one row per line: section, category,
//! subcategory, line label, then one column per period.

use std::io::Write;

use crate::error::FinreportResult;
use crate::reports::{LineKind, Statement};

/// Export a statement to CSV
///
/// Heading lines carry no amounts and are left out.
pub fn export_statement_csv<W: Write>(report: &dyn Statement, writer: W) -> FinreportResult<()> {
    let periods = &report.info().periods;
    let mut csv = csv::Writer::from_writer(writer);

    let mut header = vec!["Section", "Category", "Subcategory", "Line"];
    header.extend(periods.iter().map(String::as_str));
    csv.write_record(&header)?;

    for line in report.lines() {
        if line.kind == LineKind::Heading {
            continue;
        }
        let Some(amounts) = &line.amounts else {
            continue;
        };

        let mut record = vec![
            line.section.clone(),
            line.category.clone().unwrap_or_default(),
            line.subcategory.clone().unwrap_or_default(),
            line.label.clone(),
        ];
        record.extend(amounts.values().map(|v| format!("{:.2}", v)));
        csv.write_record(&record)?;
    }

    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinreportPaths;
    use crate::models::{ExpenseCategory, ExpenseKind, Expense, Money};
    use crate::reports::ProfitAndLossReport;
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_csv_export() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinreportPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let premises = ExpenseCategory::new("Premises");
        let rent = ExpenseCategory::new_child("Rent", premises.id);
        storage
            .expenses
            .upsert(Expense::new(
                "E-1",
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                ExpenseKind::Opex,
                rent.id,
                Money::from_minor(12_050),
                Money::zero(),
                "Bkk",
            ))
            .unwrap();
        storage.categories.upsert(premises).unwrap();
        storage.categories.upsert(rent).unwrap();

        let report = ProfitAndLossReport::generate(
            &storage,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            "monthly",
            "All",
        )
        .unwrap();

        let mut output = Vec::new();
        export_statement_csv(&report, &mut output).unwrap();
        let csv_string = String::from_utf8(output).unwrap();

        let mut rows = csv_string.lines();
        assert_eq!(rows.next(), Some("Section,Category,Subcategory,Line,jan-24,feb-24"));
        assert!(csv_string.contains("Operating Expenses,Premises,Rent,Rent,0.00,120.50"));
        assert!(csv_string.contains("EBIT,,,EBIT,0.00,-120.50"));
        assert!(!csv_string.lines().any(|l| l.starts_with("Revenue,,,Revenue")));
    }
}
