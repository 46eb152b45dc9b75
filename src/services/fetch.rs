//! Data fetching for reports
//!
//! Pulls income and expense documents for a range through a [`LedgerSource`]
//! and flattens them into the records the aggregator consumes. Expenses are
//! joined with the category tree as it stands at fetch time.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::FinreportResult;
use crate::models::{CategoryTree, ExpenseKind, Money};
use crate::storage::LedgerSource;

/// Flattened income document
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeRecord {
    pub date: NaiveDate,
    /// VAT-exclusive amount
    pub base_amount: Money,
    /// VAT-inclusive amount
    pub vat_total: Money,
    pub customer: String,
    pub location: String,
}

/// Flattened expense document joined with its category
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    pub date: NaiveDate,
    /// VAT-exclusive amount
    pub base_amount: Money,
    /// VAT-inclusive amount
    pub vat_total: Money,
    pub category_name: String,
    /// Parent category name, `None` for top-level categories
    pub parent_category_name: Option<String>,
    pub location: String,
    pub kind: ExpenseKind,
}

/// Read-only fetcher over a ledger source
pub struct DataFetcher<'a, S: LedgerSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: LedgerSource + ?Sized> DataFetcher<'a, S> {
    /// Create a new fetcher
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Income records dated within `[start, end]`
    ///
    /// `location` is an exact match; `None` means every location.
    pub fn fetch_income(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        location: Option<&str>,
    ) -> FinreportResult<Vec<IncomeRecord>> {
        let documents = self.source.income_between(start, end, location)?;

        let records: Vec<_> = documents
            .into_iter()
            .map(|doc| IncomeRecord {
                date: doc.doc_date,
                base_amount: doc.amount,
                vat_total: doc.grand_total,
                customer: doc.customer,
                location: doc.location,
            })
            .collect();

        debug!(count = records.len(), ?location, "Fetched income records");
        Ok(records)
    }

    /// Expense records dated within `[start, end]`, joined with their category
    ///
    /// `classifications` restricts the expense kinds; `None` returns all.
    /// Documents whose category no longer exists are left out.
    pub fn fetch_expenses(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        location: Option<&str>,
        classifications: Option<&[ExpenseKind]>,
    ) -> FinreportResult<Vec<ExpenseRecord>> {
        let documents = self
            .source
            .expenses_between(start, end, location, classifications)?;
        let tree = CategoryTree::from_categories(self.source.list_all_categories()?)?;

        let mut records = Vec::with_capacity(documents.len());
        for doc in documents {
            let Some(category) = tree.get(doc.category_id) else {
                debug!(doc_no = %doc.doc_no, category = %doc.category_id, "Expense without a known category, skipping");
                continue;
            };

            records.push(ExpenseRecord {
                date: doc.doc_date,
                base_amount: doc.amount,
                vat_total: doc.grand_total,
                category_name: category.name.clone(),
                parent_category_name: tree.parent_name(category.id).map(str::to_string),
                location: doc.location,
                kind: doc.kind,
            });
        }

        debug!(
            count = records.len(),
            ?location,
            ?classifications,
            "Fetched expense records"
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinreportPaths;
    use crate::error::FinreportError;
    use crate::models::{CategoryId, Expense, ExpenseCategory, Income};
    use crate::storage::categories::CategoryData;
    use crate::storage::{write_json_atomic, Storage};
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinreportPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_fetch_income_maps_amounts() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .income
            .upsert(Income::new(
                "INV-1",
                date(2025, 1, 10),
                "Acme",
                Money::from_minor(10_000),
                Money::from_minor(700),
                "Bkk",
            ))
            .unwrap();

        let fetcher = DataFetcher::new(&storage);
        let records = fetcher
            .fetch_income(date(2025, 1, 1), date(2025, 1, 31), None)
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].base_amount, Money::from_minor(10_000));
        assert_eq!(records[0].vat_total, Money::from_minor(10_700));
        assert_eq!(records[0].customer, "Acme");
    }

    #[test]
    fn test_fetch_expenses_joins_category_path() {
        let (_temp_dir, storage) = create_test_storage();
        let materials = ExpenseCategory::new("Materials");
        let raw = ExpenseCategory::new_child("Raw Materials", materials.id);

        for (no, category) in [("E-1", raw.id), ("E-2", materials.id)] {
            storage
                .expenses
                .upsert(Expense::new(
                    no,
                    date(2025, 2, 3),
                    ExpenseKind::Cogs,
                    category,
                    Money::from_minor(100),
                    Money::zero(),
                    "Bkk",
                ))
                .unwrap();
        }
        storage.categories.upsert(materials).unwrap();
        storage.categories.upsert(raw).unwrap();

        let fetcher = DataFetcher::new(&storage);
        let records = fetcher
            .fetch_expenses(date(2025, 2, 1), date(2025, 2, 28), None, None)
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category_name, "Raw Materials");
        assert_eq!(records[0].parent_category_name.as_deref(), Some("Materials"));
        assert_eq!(records[1].category_name, "Materials");
        assert_eq!(records[1].parent_category_name, None);
    }

    #[test]
    fn test_fetch_expenses_uses_current_tree() {
        let (_temp_dir, storage) = create_test_storage();
        let mut rent = ExpenseCategory::new("Rent");
        storage
            .expenses
            .upsert(Expense::new(
                "E-1",
                date(2025, 2, 3),
                ExpenseKind::Opex,
                rent.id,
                Money::from_minor(100),
                Money::zero(),
                "Bkk",
            ))
            .unwrap();
        storage.categories.upsert(rent.clone()).unwrap();

        let fetcher = DataFetcher::new(&storage);
        let before = fetcher
            .fetch_expenses(date(2025, 2, 1), date(2025, 2, 28), None, None)
            .unwrap();
        assert_eq!(before[0].category_name, "Rent");

        rent.name = "Office Rent".into();
        storage.categories.upsert(rent).unwrap();

        let after = fetcher
            .fetch_expenses(date(2025, 2, 1), date(2025, 2, 28), None, None)
            .unwrap();
        assert_eq!(after[0].category_name, "Office Rent");
    }

    #[test]
    fn test_fetch_expenses_drops_unknown_category() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .expenses
            .upsert(Expense::new(
                "E-1",
                date(2025, 2, 3),
                ExpenseKind::Opex,
                CategoryId::new(),
                Money::from_minor(100),
                Money::zero(),
                "Bkk",
            ))
            .unwrap();

        let fetcher = DataFetcher::new(&storage);
        let records = fetcher
            .fetch_expenses(date(2025, 2, 1), date(2025, 2, 28), None, None)
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_fetch_expenses_tolerates_long_stored_name() {
        let (_temp_dir, storage) = create_test_storage();
        let rent = ExpenseCategory::new("Rent");
        let mut legacy = ExpenseCategory::new("Legacy");
        legacy.name = "x".repeat(101);

        storage
            .expenses
            .upsert(Expense::new(
                "E-1",
                date(2025, 2, 3),
                ExpenseKind::Opex,
                rent.id,
                Money::from_minor(100),
                Money::zero(),
                "Bkk",
            ))
            .unwrap();

        let stored = CategoryData {
            categories: vec![rent, legacy],
        };
        write_json_atomic(storage.paths().categories_file(), &stored).unwrap();
        storage.categories.load().unwrap();

        let fetcher = DataFetcher::new(&storage);
        let records = fetcher
            .fetch_expenses(date(2025, 2, 1), date(2025, 2, 28), None, None)
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category_name, "Rent");
    }

    struct FailingSource;

    impl LedgerSource for FailingSource {
        fn income_between(
            &self,
            _start: NaiveDate,
            _end: NaiveDate,
            _location: Option<&str>,
        ) -> FinreportResult<Vec<Income>> {
            Err(FinreportError::Storage("connection refused".into()))
        }

        fn expenses_between(
            &self,
            _start: NaiveDate,
            _end: NaiveDate,
            _location: Option<&str>,
            _kinds: Option<&[ExpenseKind]>,
        ) -> FinreportResult<Vec<Expense>> {
            Err(FinreportError::Storage("connection refused".into()))
        }

        fn list_all_categories(&self) -> FinreportResult<Vec<ExpenseCategory>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_storage_failure_propagates() {
        let fetcher = DataFetcher::new(&FailingSource);
        let err = fetcher
            .fetch_income(date(2025, 1, 1), date(2025, 1, 31), None)
            .unwrap_err();
        assert!(err.is_upstream());
        assert!(err.to_string().contains("connection refused"));
    }
}
