//! Expense document model
//!
//! Every expense carries one of three classifications and a reference to a
//! category in the two-level category tree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{CategoryId, ExpenseId};
use super::money::Money;
use super::status::DocumentStatus;

/// Expense classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExpenseKind {
    /// Capital expenditure, cashflow only
    Capex,
    /// Operating expenditure
    Opex,
    /// Cost of goods sold
    Cogs,
}

impl ExpenseKind {
    /// All classifications
    pub fn all() -> &'static [Self] {
        &[Self::Capex, Self::Opex, Self::Cogs]
    }

    /// Upper-case code as stored
    pub fn code(&self) -> &'static str {
        match self {
            Self::Capex => "CAPEX",
            Self::Opex => "OPEX",
            Self::Cogs => "COGS",
        }
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ExpenseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CAPEX" => Ok(Self::Capex),
            "OPEX" => Ok(Self::Opex),
            "COGS" => Ok(Self::Cogs),
            other => Err(format!("Unknown expense type: {}", other)),
        }
    }
}

/// A stored expense document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Document number from the source system
    pub doc_no: String,

    /// Document date
    pub doc_date: NaiveDate,

    /// Supplier the expense was paid to
    #[serde(default)]
    pub supplier: String,

    /// Base amount (without VAT)
    pub amount: Money,

    /// VAT amount
    #[serde(default)]
    pub vat: Money,

    /// Amount including VAT
    pub grand_total: Money,

    /// Payment status
    #[serde(default)]
    pub status: DocumentStatus,

    /// Classification
    #[serde(rename = "type")]
    pub kind: ExpenseKind,

    /// Location tag (branch/site)
    pub location: String,

    /// Category (top-level or subcategory)
    pub category_id: CategoryId,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl Expense {
    /// Create a new expense document; `grand_total` is `amount + vat`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        doc_no: impl Into<String>,
        doc_date: NaiveDate,
        kind: ExpenseKind,
        category_id: CategoryId,
        amount: Money,
        vat: Money,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            doc_no: doc_no.into(),
            doc_date,
            supplier: String::new(),
            amount,
            vat,
            grand_total: amount + vat,
            status: DocumentStatus::default(),
            kind,
            location: location.into(),
            category_id,
            notes: String::new(),
        }
    }

    /// Set the supplier
    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = supplier.into();
        self
    }
}
