//! Storage layer for finreport
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the [`LedgerSource`] query seam the report pipeline reads
//! through.

pub mod categories;
pub mod expenses;
pub mod file_io;
pub mod income;
pub mod init;

pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use income::IncomeRepository;
pub use init::initialize_storage;

use chrono::NaiveDate;

use crate::config::paths::FinreportPaths;
use crate::error::FinreportError;
use crate::models::{Expense, ExpenseCategory, ExpenseKind, Income};

/// Read-only queries the report pipeline needs from a document store
///
/// Date bounds are inclusive. Implementations return records ordered by
/// document date, then document number, and surface their own failures as
/// [`FinreportError::Storage`].
pub trait LedgerSource {
    /// Income documents dated within `[start, end]`, optionally at one location
    fn income_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        location: Option<&str>,
    ) -> Result<Vec<Income>, FinreportError>;

    /// Expense documents dated within `[start, end]`
    ///
    /// `kinds` restricts the classifications returned; `None` or an empty
    /// slice returns all of them.
    fn expenses_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        location: Option<&str>,
        kinds: Option<&[ExpenseKind]>,
    ) -> Result<Vec<Expense>, FinreportError>;

    /// Every expense category, top-level and sub
    fn list_all_categories(&self) -> Result<Vec<ExpenseCategory>, FinreportError>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinreportPaths,
    pub income: IncomeRepository,
    pub expenses: ExpenseRepository,
    pub categories: CategoryRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinreportPaths) -> Result<Self, FinreportError> {
        paths.ensure_directories()?;

        Ok(Self {
            income: IncomeRepository::new(paths.income_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinreportPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FinreportError> {
        self.income.load()?;
        self.expenses.load()?;
        self.categories.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FinreportError> {
        self.income.save()?;
        self.expenses.save()?;
        self.categories.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

impl LedgerSource for Storage {
    fn income_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        location: Option<&str>,
    ) -> Result<Vec<Income>, FinreportError> {
        self.income.get_by_date_range(start, end, location)
    }

    fn expenses_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        location: Option<&str>,
        kinds: Option<&[ExpenseKind]>,
    ) -> Result<Vec<Expense>, FinreportError> {
        self.expenses.get_by_date_range(start, end, location, kinds)
    }

    fn list_all_categories(&self) -> Result<Vec<ExpenseCategory>, FinreportError> {
        self.categories.get_all()
    }
}
