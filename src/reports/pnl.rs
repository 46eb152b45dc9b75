//! Profit & Loss Report
//!
//! Revenue by customer, COGS and operating expenses by category, and the
//! derived gross profit, EBIT, income tax and net earnings. Amounts are
//! VAT-exclusive; CAPEX never appears.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use super::{expense_section_lines, ReportInfo, Statement, StatementLine};
use crate::error::FinreportResult;
use crate::models::{ExpenseKind, Granularity, PeriodAmounts};
use crate::services::aggregator::{aggregate_expenses, aggregate_revenue};
use crate::services::period::validate_range;
use crate::services::{
    resolve_location, AmountBasis, DataFetcher, ExpenseSection, PeriodPlan, PnlMetrics,
    RevenueSection,
};
use crate::storage::LedgerSource;

/// Profit & Loss Report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitAndLossReport {
    pub report_info: ReportInfo,
    pub revenue: RevenueSection,
    pub cogs: ExpenseSection,
    pub gross_profit: PeriodAmounts,
    pub operating_expenses: ExpenseSection,
    pub ebit: PeriodAmounts,
    pub income_tax: PeriodAmounts,
    pub net_earnings: PeriodAmounts,
}

impl ProfitAndLossReport {
    /// Generate a P&L report
    ///
    /// `format` is `"yearly"` or `"monthly"`; `location` of `"All"` means
    /// every location. The range and format are checked before any data is
    /// read, and any storage failure aborts the whole report.
    pub fn generate<S: LedgerSource + ?Sized>(
        source: &S,
        start_date: NaiveDate,
        end_date: NaiveDate,
        format: &str,
        location: &str,
    ) -> FinreportResult<Self> {
        validate_range(start_date, end_date)?;
        let granularity: Granularity = format.parse()?;
        let plan = PeriodPlan::new(start_date, end_date, granularity)?;
        let location = resolve_location(location);

        let fetcher = DataFetcher::new(source);
        let income = fetcher.fetch_income(start_date, end_date, location)?;
        let cogs = fetcher.fetch_expenses(start_date, end_date, location, Some(&[ExpenseKind::Cogs]))?;
        let opex = fetcher.fetch_expenses(start_date, end_date, location, Some(&[ExpenseKind::Opex]))?;

        let revenue = aggregate_revenue(&income, &plan, AmountBasis::Base);
        let cogs = aggregate_expenses(&cogs, &plan, AmountBasis::Base);
        let operating_expenses = aggregate_expenses(&opex, &plan, AmountBasis::Base);

        let metrics = PnlMetrics::calculate(
            &revenue.total_net_revenue,
            &cogs.total,
            &operating_expenses.total,
        );

        info!(
            %start_date,
            %end_date,
            %granularity,
            location = location.unwrap_or("All"),
            income_rows = income.len(),
            "Generated P&L report"
        );

        Ok(Self {
            report_info: ReportInfo::new(&plan, location),
            revenue,
            cogs,
            gross_profit: metrics.gross_profit,
            operating_expenses,
            ebit: metrics.ebit,
            income_tax: metrics.income_tax,
            net_earnings: metrics.net_earnings,
        })
    }
}

impl Statement for ProfitAndLossReport {
    fn title(&self) -> String {
        format!(
            "Profit & Loss - {} to {} ({})",
            self.report_info.start_date, self.report_info.end_date, self.report_info.location
        )
    }

    fn info(&self) -> &ReportInfo {
        &self.report_info
    }

    fn lines(&self) -> Vec<StatementLine> {
        let mut lines = vec![StatementLine::heading("Revenue")];
        for (customer, amounts) in &self.revenue.revenue_by_customer {
            lines.push(StatementLine::item("Revenue", customer, amounts));
        }
        lines.push(StatementLine::total(
            "Revenue",
            "Total Net Revenue",
            &self.revenue.total_net_revenue,
        ));

        lines.extend(expense_section_lines("COGS", &self.cogs));
        lines.push(StatementLine::total("Gross Profit", "Gross Profit", &self.gross_profit));
        lines.extend(expense_section_lines(
            "Operating Expenses",
            &self.operating_expenses,
        ));
        lines.push(StatementLine::total("EBIT", "EBIT", &self.ebit));
        lines.push(StatementLine::total("Income Tax", "Income Tax", &self.income_tax));
        lines.push(StatementLine::total("Net Earnings", "Net Earnings", &self.net_earnings));
        lines
    }
}
