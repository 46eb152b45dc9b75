//! Core data models for finreport
//!
//! Stored documents (income, expenses), the two-level expense category tree,
//! money amounts and report periods.

pub mod amounts;
pub mod category;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;
pub mod period;
pub mod status;

pub use amounts::PeriodAmounts;
pub use category::{CategoryTree, ExpenseCategory};
pub use expense::{Expense, ExpenseKind};
pub use ids::{CategoryId, ExpenseId, IncomeId};
pub use income::Income;
pub use money::Money;
pub use period::{Granularity, Month, TOTAL_LABEL};
pub use status::DocumentStatus;
