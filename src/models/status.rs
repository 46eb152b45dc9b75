//! Document status shared by income and expense documents

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment status of a document
///
/// Reports do not filter on status; it is carried for display and auditing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DocumentStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Paid => write!(f, "Paid"),
            Self::Overdue => write!(f, "Overdue"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}
