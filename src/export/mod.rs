//! Export module for finreport
//!
//! Writes generated reports to any writer:
//! - JSON: the nested report document, machine-readable
//! - YAML: the same document, human-readable
//! - CSV: statement lines flattened for spreadsheets

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_statement_csv;
pub use json::export_report_json;
pub use yaml::export_report_yaml;
