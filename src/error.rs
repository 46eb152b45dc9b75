//! Custom error types for finreport
//!
//! This module defines the error hierarchy for the report engine using
//! thiserror for ergonomic error definitions. Validation failures (bad ranges,
//! bad formats, unparseable dates) are kept distinct from upstream storage
//! failures so the transport layer can map them to different status families.

use chrono::NaiveDate;
use thiserror::Error;

/// Date range rejected by the period planner
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Start date falls after the end date
    #[error("start_date cannot be after end_date ({start} > {end})")]
    Inverted { start: NaiveDate, end: NaiveDate },

    /// Range spans more months than a report may cover
    #[error("Date range cannot exceed {max_months} months ({start} to {end} spans {months})")]
    TooLong {
        start: NaiveDate,
        end: NaiveDate,
        months: i32,
        max_months: i32,
    },
}

impl RangeError {
    /// The offending start date
    pub fn start(&self) -> NaiveDate {
        match self {
            Self::Inverted { start, .. } | Self::TooLong { start, .. } => *start,
        }
    }

    /// The offending end date
    pub fn end(&self) -> NaiveDate {
        match self {
            Self::Inverted { end, .. } | Self::TooLong { end, .. } => *end,
        }
    }
}

/// The main error type for finreport operations
#[derive(Error, Debug)]
pub enum FinreportError {
    /// Report range is inverted or too long
    #[error("Range error: {0}")]
    Range(#[from] RangeError),

    /// Report format is not one of the supported granularities
    #[error("Invalid format '{0}'. Must be 'yearly' or 'monthly'")]
    Format(String),

    /// A boundary date could not be parsed
    #[error("Invalid {field}: '{value}'. Expected {expected}")]
    InvalidDate {
        field: &'static str,
        value: String,
        expected: String,
    },

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Failures reported by the storage collaborator
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Report rendering/export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl FinreportError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error was caused by caller input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Range(_) | Self::Format(_) | Self::InvalidDate { .. } | Self::Validation(_)
        )
    }

    /// Check if this error came from the storage collaborator
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Io(_) | Self::Json(_))
    }

    /// HTTP status family a transport layer should use for this error
    pub fn status_hint(&self) -> u16 {
        if self.is_validation() {
            422
        } else if self.is_not_found() {
            404
        } else {
            500
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FinreportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinreportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for FinreportError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for FinreportError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for finreport operations
pub type FinreportResult<T> = Result<T, FinreportError>;
