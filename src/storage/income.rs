//! Income repository for JSON storage
//!
//! Manages loading and saving income documents to income.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::FinreportError;
use crate::models::{Income, IncomeId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct IncomeData {
    #[serde(default)]
    income: Vec<Income>,
}

/// Repository for income documents
pub struct IncomeRepository {
    path: PathBuf,
    data: RwLock<HashMap<IncomeId, Income>>,
}

impl IncomeRepository {
    /// Create a new repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load income documents from disk
    pub fn load(&self) -> Result<(), FinreportError> {
        let file_data: IncomeData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FinreportError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for income in file_data.income {
            data.insert(income.id, income);
        }

        Ok(())
    }

    /// Save income documents to disk
    pub fn save(&self) -> Result<(), FinreportError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinreportError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut income: Vec<_> = data.values().cloned().collect();
        income.sort_by(|a, b| a.doc_date.cmp(&b.doc_date).then(a.doc_no.cmp(&b.doc_no)));

        write_json_atomic(&self.path, &IncomeData { income })
    }

    /// Insert or update an income document
    pub fn upsert(&self, income: Income) -> Result<(), FinreportError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinreportError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(income.id, income);
        Ok(())
    }

    /// Income documents dated within `[start, end]`, optionally at one location
    ///
    /// Ordered by document date, then document number.
    pub fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        location: Option<&str>,
    ) -> Result<Vec<Income>, FinreportError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinreportError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut income: Vec<_> = data
            .values()
            .filter(|i| i.doc_date >= start && i.doc_date <= end)
            .filter(|i| location.map_or(true, |loc| i.location == loc))
            .cloned()
            .collect();
        income.sort_by(|a, b| a.doc_date.cmp(&b.doc_date).then(a.doc_no.cmp(&b.doc_no)));
        Ok(income)
    }

    /// Count income documents
    pub fn count(&self) -> Result<usize, FinreportError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinreportError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
