//! Expense repository for JSON storage
//!
//! Manages loading and saving expense documents to expenses.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::FinreportError;
use crate::models::{Expense, ExpenseId, ExpenseKind};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    #[serde(default)]
    expenses: Vec<Expense>,
}

/// Repository for expense documents
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
}

impl ExpenseRepository {
    /// Create a new repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), FinreportError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FinreportError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for expense in file_data.expenses {
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), FinreportError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinreportError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| a.doc_date.cmp(&b.doc_date).then(a.doc_no.cmp(&b.doc_no)));

        write_json_atomic(&self.path, &ExpenseData { expenses })
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), FinreportError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinreportError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(expense.id, expense);
        Ok(())
    }

    /// Expenses dated within `[start, end]`
    ///
    /// `location` restricts to one location; `kinds` restricts to a set of
    /// classifications (an empty set means no restriction). Ordered by
    /// document date, then document number.
    pub fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        location: Option<&str>,
        kinds: Option<&[ExpenseKind]>,
    ) -> Result<Vec<Expense>, FinreportError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinreportError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let kinds = kinds.filter(|k| !k.is_empty());
        let mut expenses: Vec<_> = data
            .values()
            .filter(|e| e.doc_date >= start && e.doc_date <= end)
            .filter(|e| location.map_or(true, |loc| e.location == loc))
            .filter(|e| kinds.map_or(true, |k| k.contains(&e.kind)))
            .cloned()
            .collect();
        expenses.sort_by(|a, b| a.doc_date.cmp(&b.doc_date).then(a.doc_no.cmp(&b.doc_no)));
        Ok(expenses)
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, FinreportError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinreportError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        (temp_dir, ExpenseRepository::new(path))
    }

    fn expense(doc_no: &str, kind: ExpenseKind, location: &str) -> Expense {
        Expense::new(
            doc_no,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            kind,
            CategoryId::new(),
            Money::from_minor(500),
            Money::zero(),
            location,
        )
    }

    #[test]
    fn test_kind_filter() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(expense("E-1", ExpenseKind::Cogs, "Bkk")).unwrap();
        repo.upsert(expense("E-2", ExpenseKind::Opex, "Bkk")).unwrap();
        repo.upsert(expense("E-3", ExpenseKind::Capex, "Bkk")).unwrap();

        let d = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let cogs = repo
            .get_by_date_range(d, d, None, Some(&[ExpenseKind::Cogs]))
            .unwrap();
        assert_eq!(cogs.len(), 1);
        assert_eq!(cogs[0].doc_no, "E-1");

        let both = repo
            .get_by_date_range(d, d, None, Some(&[ExpenseKind::Cogs, ExpenseKind::Capex]))
            .unwrap();
        assert_eq!(both.len(), 2);

        let unrestricted = repo.get_by_date_range(d, d, None, Some(&[])).unwrap();
        assert_eq!(unrestricted.len(), 3);
    }

    #[test]
    fn test_location_and_range_filter() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(expense("E-1", ExpenseKind::Opex, "Bkk")).unwrap();
        repo.upsert(expense("E-2", ExpenseKind::Opex, "Hkt")).unwrap();

        let d = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let bkk = repo.get_by_date_range(d, d, Some("Bkk"), None).unwrap();
        assert!(bkk.iter().all(|e| e.location == "Bkk"));
        assert_eq!(bkk.len(), 1);

        let before = d.pred_opt().unwrap();
        assert!(repo
            .get_by_date_range(before, before, None, None)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.upsert(expense("E-1", ExpenseKind::Opex, "Bkk")).unwrap();
        repo.save().unwrap();

        let repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 1);
    }
}
