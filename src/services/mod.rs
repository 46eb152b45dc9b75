//! Service layer for finreport
//!
//! The report pipeline's building blocks: period planning, data fetching,
//! category-tree aggregation and derived metrics. Each works against an
//! explicit read-only [`LedgerSource`](crate::storage::LedgerSource) handle.

pub mod aggregator;
pub mod fetch;
pub mod metrics;
pub mod period;

pub use aggregator::{AmountBasis, CategoryBreakdown, ExpenseSection, RevenueSection};
pub use fetch::{DataFetcher, ExpenseRecord, IncomeRecord};
pub use metrics::{CashflowMetrics, PnlMetrics, TAX_RATE};
pub use period::{parse_report_date, PeriodPlan, MAX_RANGE_MONTHS};

/// Location value meaning "no location filter"
pub const ALL_LOCATIONS: &str = "All";

/// Resolve a caller-supplied location to a storage filter
///
/// `"All"` and the empty string mean no filter.
pub fn resolve_location(location: &str) -> Option<&str> {
    if location.is_empty() || location == ALL_LOCATIONS {
        None
    } else {
        Some(location)
    }
}
