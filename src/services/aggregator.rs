//! Section aggregation
//!
//! Buckets fetched records into the planned periods. Expenses are grouped
//! into the two-level category hierarchy, income by customer. All sums run in
//! [`Money`] minor units and become `f64` only in the finished mapping.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use super::fetch::{ExpenseRecord, IncomeRecord};
use super::period::PeriodPlan;
use crate::models::{Money, PeriodAmounts};

/// Which amount of a document a report sums
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountBasis {
    /// VAT-exclusive base amount (P&L)
    Base,
    /// VAT-inclusive grand total (cashflow)
    VatInclusive,
}

impl AmountBasis {
    fn of_expense(self, record: &ExpenseRecord) -> Money {
        match self {
            Self::Base => record.base_amount,
            Self::VatInclusive => record.vat_total,
        }
    }

    fn of_income(self, record: &IncomeRecord) -> Money {
        match self {
            Self::Base => record.base_amount,
            Self::VatInclusive => record.vat_total,
        }
    }
}

/// Amounts under one top-level category
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CategoryBreakdown {
    /// Per-subcategory amounts, keyed by subcategory name
    pub subcategories: BTreeMap<String, PeriodAmounts>,

    /// Amounts posted straight to the top-level category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct: Option<PeriodAmounts>,
}

/// One expense classification broken down by category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseSection {
    pub expenses_by_category: BTreeMap<String, CategoryBreakdown>,
    pub total: PeriodAmounts,
}

impl ExpenseSection {
    /// Section with no categories and a zero-filled total
    pub fn empty(plan: &PeriodPlan) -> Self {
        Self {
            expenses_by_category: BTreeMap::new(),
            total: plan.zeroed(),
        }
    }
}

/// Revenue broken down by customer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueSection {
    pub revenue_by_customer: BTreeMap<String, PeriodAmounts>,
    pub total_net_revenue: PeriodAmounts,
}

/// Per-key slot accumulator
struct Buckets<K> {
    slots: BTreeMap<K, Vec<Money>>,
    width: usize,
}

impl<K: Ord> Buckets<K> {
    fn new(width: usize) -> Self {
        Self {
            slots: BTreeMap::new(),
            width,
        }
    }

    fn add(&mut self, key: K, slot: usize, amount: Money) {
        let width = self.width;
        let row = self
            .slots
            .entry(key)
            .or_insert_with(|| vec![Money::zero(); width]);
        row[slot] += amount;
    }
}

/// Group expense records into the category hierarchy
///
/// Records with a parent land under `parent -> subcategories -> name`;
/// records without one land in that category's `direct` block. A top-level
/// category that never appears as a parent keeps an empty `subcategories`
/// map. Records outside the plan are skipped.
pub fn aggregate_expenses(
    records: &[ExpenseRecord],
    plan: &PeriodPlan,
    basis: AmountBasis,
) -> ExpenseSection {
    if records.is_empty() {
        return ExpenseSection::empty(plan);
    }

    let mut total = plan.empty_slots();
    let mut subcategories: Buckets<(String, String)> = Buckets::new(plan.len());
    let mut direct: Buckets<String> = Buckets::new(plan.len());

    for record in records {
        let Some(slot) = plan.slot_of(record.date) else {
            warn!(
                date = %record.date,
                category = %record.category_name,
                "Expense falls outside the planned periods, skipping"
            );
            continue;
        };

        let amount = basis.of_expense(record);
        total[slot] += amount;

        match &record.parent_category_name {
            Some(parent) => {
                subcategories.add((parent.clone(), record.category_name.clone()), slot, amount)
            }
            None => direct.add(record.category_name.clone(), slot, amount),
        }
    }

    let mut expenses_by_category: BTreeMap<String, CategoryBreakdown> = BTreeMap::new();

    for ((parent, name), slots) in subcategories.slots {
        expenses_by_category
            .entry(parent)
            .or_default()
            .subcategories
            .insert(name, plan.amounts(&slots));
    }

    for (name, slots) in direct.slots {
        expenses_by_category.entry(name).or_default().direct = Some(plan.amounts(&slots));
    }

    ExpenseSection {
        expenses_by_category,
        total: plan.amounts(&total),
    }
}

/// Group income records by customer
pub fn aggregate_revenue(
    records: &[IncomeRecord],
    plan: &PeriodPlan,
    basis: AmountBasis,
) -> RevenueSection {
    let mut total = plan.empty_slots();
    let mut by_customer: Buckets<String> = Buckets::new(plan.len());

    for record in records {
        let Some(slot) = plan.slot_of(record.date) else {
            warn!(
                date = %record.date,
                customer = %record.customer,
                "Income falls outside the planned periods, skipping"
            );
            continue;
        };

        let amount = basis.of_income(record);
        total[slot] += amount;
        by_customer.add(record.customer.clone(), slot, amount);
    }

    RevenueSection {
        revenue_by_customer: by_customer
            .slots
            .into_iter()
            .map(|(customer, slots)| (customer, plan.amounts(&slots)))
            .collect(),
        total_net_revenue: plan.amounts(&total),
    }
}

/// Flat per-period income total
pub fn sum_income(records: &[IncomeRecord], plan: &PeriodPlan, basis: AmountBasis) -> PeriodAmounts {
    let mut total = plan.empty_slots();
    for record in records {
        match plan.slot_of(record.date) {
            Some(slot) => total[slot] += basis.of_income(record),
            None => warn!(date = %record.date, "Income falls outside the planned periods, skipping"),
        }
    }
    plan.amounts(&total)
}
