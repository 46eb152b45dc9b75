//! Income document model
//!
//! A sales document issued to a customer. `amount` is the VAT-exclusive base
//! used by the P&L, `grand_total` the VAT-inclusive figure used by cashflow.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::IncomeId;
use super::money::Money;
use super::status::DocumentStatus;

/// A stored income document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    /// Unique identifier
    pub id: IncomeId,

    /// Document number from the source system
    pub doc_no: String,

    /// Document date
    pub doc_date: NaiveDate,

    /// Customer the document was issued to
    pub customer: String,

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

    /// Location tag (branch/site)
    pub location: String,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl Income {
    /// Create a new income document; `grand_total` is `amount + vat`
    pub fn new(
        doc_no: impl Into<String>,
        doc_date: NaiveDate,
        customer: impl Into<String>,
        amount: Money,
        vat: Money,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: IncomeId::new(),
            doc_no: doc_no.into(),
            doc_date,
            customer: customer.into(),
            amount,
            vat,
            grand_total: amount + vat,
            status: DocumentStatus::default(),
            location: location.into(),
            notes: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_income() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let income = Income::new(
            "INV-001",
            date,
            "Customer A",
            Money::from_minor(10_000),
            Money::from_minor(700),
            "Bkk",
        );

        assert_eq!(income.grand_total, Money::from_minor(10_700));
        assert_eq!(income.status, DocumentStatus::Pending);
        assert_eq!(income.location, "Bkk");
    }

    #[test]
    fn test_serialization_defaults() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "doc_no": "INV-9",
            "doc_date": "2024-09-15",
            "customer": "Customer B",
            "amount": 5000,
            "grand_total": 5350,
            "location": "Hkt"
        }"#;
        let income: Income = serde_json::from_str(json).unwrap();
        assert_eq!(income.vat, Money::zero());
        assert!(income.notes.is_empty());
        assert_eq!(income.grand_total, Money::from_minor(5350));
    }
}
