//! Derived report figures
//!
//! Works period by period on already-summed section totals, never on raw
//! records.

use crate::models::{Granularity, PeriodAmounts, TOTAL_LABEL};

/// Flat income tax rate applied to positive EBIT
pub const TAX_RATE: f64 = 0.15;

/// P&L figures derived from the section totals
#[derive(Debug, Clone, PartialEq)]
pub struct PnlMetrics {
    pub gross_profit: PeriodAmounts,
    pub ebit: PeriodAmounts,
    pub income_tax: PeriodAmounts,
    pub net_earnings: PeriodAmounts,
}

impl PnlMetrics {
    /// Compute gross profit, EBIT, tax and net earnings
    ///
    /// Tax is `ebit * TAX_RATE` floored at zero; losses carry no credit.
    pub fn calculate(revenue: &PeriodAmounts, cogs: &PeriodAmounts, opex: &PeriodAmounts) -> Self {
        let gross_profit = revenue.zip_with(cogs, |r, c| r - c);
        let ebit = gross_profit.zip_with(opex, |g, o| g - o);
        let income_tax = ebit.map(|e| (e * TAX_RATE).max(0.0));
        let net_earnings = ebit.zip_with(&income_tax, |e, t| e - t);

        Self {
            gross_profit,
            ebit,
            income_tax,
            net_earnings,
        }
    }
}

/// Cashflow figures derived from the inflow/outflow totals
#[derive(Debug, Clone, PartialEq)]
pub struct CashflowMetrics {
    pub net_cashflow: PeriodAmounts,
    pub opening_balance: PeriodAmounts,
    pub closing_balance: PeriodAmounts,
}

impl CashflowMetrics {
    /// Compute net cashflow and the opening/closing balances
    pub fn calculate(
        total_inflows: &PeriodAmounts,
        total_outflows: &PeriodAmounts,
        granularity: Granularity,
        opening_balance: f64,
    ) -> Self {
        let net_cashflow = total_inflows.zip_with(total_outflows, |i, o| i - o);
        let (opening_balance, closing_balance) =
            running_balances(&net_cashflow, granularity, opening_balance);

        Self {
            net_cashflow,
            opening_balance,
            closing_balance,
        }
    }
}

/// Opening and closing balance per period
///
/// Yearly reports have a single `"Total"` period. Monthly balances carry
/// forward: each month opens at the previous month's close.
pub fn running_balances(
    net_cashflow: &PeriodAmounts,
    granularity: Granularity,
    opening_balance: f64,
) -> (PeriodAmounts, PeriodAmounts) {
    match granularity {
        Granularity::Yearly => {
            let net = net_cashflow.get(TOTAL_LABEL).unwrap_or(0.0);
            (
                PeriodAmounts::from_pairs([(TOTAL_LABEL, opening_balance)]),
                PeriodAmounts::from_pairs([(TOTAL_LABEL, opening_balance + net)]),
            )
        }
        Granularity::Monthly => {
            let mut opening = Vec::with_capacity(net_cashflow.len());
            let mut closing = Vec::with_capacity(net_cashflow.len());
            let mut balance = opening_balance;

            for (period, net) in net_cashflow.iter() {
                opening.push((period, balance));
                balance += net;
                closing.push((period, balance));
            }

            (
                PeriodAmounts::from_pairs(opening),
                PeriodAmounts::from_pairs(closing),
            )
        }
    }
}
