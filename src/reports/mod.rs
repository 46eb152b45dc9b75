//! Reports module for finreport
//!
//! The two financial statements (P&L and cashflow), their shared metadata
//! block and a flattened line view used by the table and CSV renderers.

pub mod cashflow;
pub mod pnl;

pub use cashflow::{CashInflows, CashOutflows, CashflowReport};
pub use pnl::ProfitAndLossReport;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::{Granularity, PeriodAmounts};
use crate::services::{ExpenseSection, PeriodPlan, ALL_LOCATIONS};

/// Metadata describing how a report was produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportInfo {
    /// First day covered (ISO-8601)
    pub start_date: NaiveDate,
    /// Last day covered (ISO-8601)
    pub end_date: NaiveDate,
    pub format: Granularity,
    /// Location filter, `"All"` when unfiltered
    pub location: String,
    /// Period labels in chronological order
    pub periods: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl ReportInfo {
    /// Describe a report over `plan` for the resolved location filter
    pub fn new(plan: &PeriodPlan, location: Option<&str>) -> Self {
        Self {
            start_date: plan.start(),
            end_date: plan.end(),
            format: plan.granularity(),
            location: location.unwrap_or(ALL_LOCATIONS).to_string(),
            periods: plan.periods().to_vec(),
            generated_at: Utc::now(),
        }
    }
}

/// Role of a line in a rendered statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Section title, no amounts
    Heading,
    /// Category, subcategory or customer amounts
    Item,
    /// Section total or derived figure
    Total,
}

/// One row of a statement flattened for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct StatementLine {
    pub kind: LineKind,
    pub section: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub label: String,
    pub amounts: Option<PeriodAmounts>,
}

impl StatementLine {
    pub fn heading(section: &str) -> Self {
        Self {
            kind: LineKind::Heading,
            section: section.to_string(),
            category: None,
            subcategory: None,
            label: section.to_string(),
            amounts: None,
        }
    }

    pub fn total(section: &str, label: &str, amounts: &PeriodAmounts) -> Self {
        Self {
            kind: LineKind::Total,
            section: section.to_string(),
            category: None,
            subcategory: None,
            label: label.to_string(),
            amounts: Some(amounts.clone()),
        }
    }

    pub fn item(section: &str, category: &str, amounts: &PeriodAmounts) -> Self {
        Self {
            kind: LineKind::Item,
            section: section.to_string(),
            category: Some(category.to_string()),
            subcategory: None,
            label: category.to_string(),
            amounts: Some(amounts.clone()),
        }
    }

    pub fn sub_item(section: &str, category: &str, subcategory: &str, amounts: &PeriodAmounts) -> Self {
        Self {
            kind: LineKind::Item,
            section: section.to_string(),
            category: Some(category.to_string()),
            subcategory: Some(subcategory.to_string()),
            label: subcategory.to_string(),
            amounts: Some(amounts.clone()),
        }
    }

    /// Nesting level: 0 for sections and totals, 1 for categories, 2 below
    pub fn depth(&self) -> usize {
        match (&self.category, &self.subcategory) {
            (_, Some(_)) => 2,
            (Some(_), None) => 1,
            _ => 0,
        }
    }
}

/// A report that can be laid out as a grid of lines by periods
pub trait Statement {
    /// Human-readable title
    fn title(&self) -> String;

    /// Report metadata
    fn info(&self) -> &ReportInfo;

    /// Rows in display order
    fn lines(&self) -> Vec<StatementLine>;
}

/// Label used for amounts posted directly to a category that also has subcategories
pub const DIRECT_LABEL: &str = "(direct)";

/// Lines for one expense section: heading, categories, subcategories, total
pub(crate) fn expense_section_lines(section: &str, data: &ExpenseSection) -> Vec<StatementLine> {
    let mut lines = vec![StatementLine::heading(section)];

    for (category, breakdown) in &data.expenses_by_category {
        if breakdown.subcategories.is_empty() {
            if let Some(direct) = &breakdown.direct {
                lines.push(StatementLine::item(section, category, direct));
            }
            continue;
        }

        let mut subtotal = data.total.map(|_| 0.0);
        for amounts in breakdown.subcategories.values().chain(breakdown.direct.iter()) {
            subtotal = subtotal.zip_with(amounts, |a, b| a + b);
        }
        lines.push(StatementLine::item(section, category, &subtotal));

        for (name, amounts) in &breakdown.subcategories {
            lines.push(StatementLine::sub_item(section, category, name, amounts));
        }
        if let Some(direct) = &breakdown.direct {
            lines.push(StatementLine::sub_item(section, category, DIRECT_LABEL, direct));
        }
    }

    lines.push(StatementLine::total(section, &format!("Total {}", section), &data.total));
    lines
}
