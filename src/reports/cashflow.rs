//! Cashflow Report
//!
//! Cash in (sales at grand total, plus funding and other income placeholders)
//! against cash out (COGS, OPEX and CAPEX at grand total), with opening and
//! closing balances carried from a caller-supplied starting balance.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use super::{expense_section_lines, ReportInfo, Statement, StatementLine};
use crate::error::FinreportResult;
use crate::models::{ExpenseKind, Granularity, PeriodAmounts};
use crate::services::aggregator::{aggregate_expenses, sum_income};
use crate::services::period::validate_range;
use crate::services::{
    resolve_location, AmountBasis, CashflowMetrics, DataFetcher, ExpenseSection, PeriodPlan,
};
use crate::storage::LedgerSource;

/// Cash received, per period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashInflows {
    pub sales_income: PeriodAmounts,
    /// Always zero; no funding source is recorded yet
    pub fundings: PeriodAmounts,
    /// Always zero; no other income source is recorded yet
    pub other_income: PeriodAmounts,
    pub total_inflows: PeriodAmounts,
}

/// Cash paid, per classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashOutflows {
    pub cogs: ExpenseSection,
    pub opex: ExpenseSection,
    pub capex: ExpenseSection,
    pub total_outflows: PeriodAmounts,
}

/// Cashflow Report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashflowReport {
    pub report_info: ReportInfo,
    pub cash_inflows: CashInflows,
    pub cash_outflows: CashOutflows,
    pub net_cashflow: PeriodAmounts,
    pub opening_balance: PeriodAmounts,
    pub closing_balance: PeriodAmounts,
}

impl CashflowReport {
    /// Generate a cashflow report
    ///
    /// Monthly balances carry forward: each month opens at the previous
    /// month's close, the first at `opening_balance`.
    pub fn generate<S: LedgerSource + ?Sized>(
        source: &S,
        start_date: NaiveDate,
        end_date: NaiveDate,
        format: &str,
        location: &str,
        opening_balance: f64,
    ) -> FinreportResult<Self> {
        validate_range(start_date, end_date)?;
        let granularity: Granularity = format.parse()?;
        let plan = PeriodPlan::new(start_date, end_date, granularity)?;
        let location = resolve_location(location);

        let fetcher = DataFetcher::new(source);
        let income = fetcher.fetch_income(start_date, end_date, location)?;
        let outflow_section = |kind: ExpenseKind| -> FinreportResult<ExpenseSection> {
            let records = fetcher.fetch_expenses(start_date, end_date, location, Some(&[kind]))?;
            Ok(aggregate_expenses(&records, &plan, AmountBasis::VatInclusive))
        };
        let cogs = outflow_section(ExpenseKind::Cogs)?;
        let opex = outflow_section(ExpenseKind::Opex)?;
        let capex = outflow_section(ExpenseKind::Capex)?;

        let sales_income = sum_income(&income, &plan, AmountBasis::VatInclusive);
        let fundings = plan.zeroed();
        let other_income = plan.zeroed();
        let total_inflows = sales_income
            .zip_with(&fundings, |a, b| a + b)
            .zip_with(&other_income, |a, b| a + b);

        let total_outflows = cogs
            .total
            .zip_with(&opex.total, |a, b| a + b)
            .zip_with(&capex.total, |a, b| a + b);

        let metrics =
            CashflowMetrics::calculate(&total_inflows, &total_outflows, granularity, opening_balance);

        info!(
            %start_date,
            %end_date,
            %granularity,
            location = location.unwrap_or("All"),
            opening_balance,
            "Generated cashflow report"
        );

        Ok(Self {
            report_info: ReportInfo::new(&plan, location),
            cash_inflows: CashInflows {
                sales_income,
                fundings,
                other_income,
                total_inflows,
            },
            cash_outflows: CashOutflows {
                cogs,
                opex,
                capex,
                total_outflows,
            },
            net_cashflow: metrics.net_cashflow,
            opening_balance: metrics.opening_balance,
            closing_balance: metrics.closing_balance,
        })
    }
}

impl Statement for CashflowReport {
    fn title(&self) -> String {
        format!(
            "Cashflow - {} to {} ({})",
            self.report_info.start_date, self.report_info.end_date, self.report_info.location
        )
    }

    fn info(&self) -> &ReportInfo {
        &self.report_info
    }

    fn lines(&self) -> Vec<StatementLine> {
        let inflows = &self.cash_inflows;
        let outflows = &self.cash_outflows;

        let mut lines = vec![
            StatementLine::total("Opening Balance", "Opening Balance", &self.opening_balance),
            StatementLine::heading("Cash Inflows"),
            StatementLine::item("Cash Inflows", "Sales Income", &inflows.sales_income),
            StatementLine::item("Cash Inflows", "Fundings", &inflows.fundings),
            StatementLine::item("Cash Inflows", "Other Income", &inflows.other_income),
            StatementLine::total("Cash Inflows", "Total Inflows", &inflows.total_inflows),
        ];

        lines.extend(expense_section_lines("COGS", &outflows.cogs));
        lines.extend(expense_section_lines("OPEX", &outflows.opex));
        lines.extend(expense_section_lines("CAPEX", &outflows.capex));
        lines.push(StatementLine::total(
            "Cash Outflows",
            "Total Outflows",
            &outflows.total_outflows,
        ));
        lines.push(StatementLine::total("Net Cashflow", "Net Cashflow", &self.net_cashflow));
        lines.push(StatementLine::total(
            "Closing Balance",
            "Closing Balance",
            &self.closing_balance,
        ));
        lines
    }
}
