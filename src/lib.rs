//! finreport - P&L and cashflow statements from income and expense documents
//!
//! This library turns stored income and expense documents into
//! period-bucketed financial statements. A report request names a date
//! range, a granularity (`yearly` or `monthly`) and an optional location;
//! the engine plans the periods, fetches the matching documents, groups
//! expenses into the two-level category tree and derives the statement
//! figures.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (documents, categories, money, periods)
//! - `storage`: JSON file storage and the `LedgerSource` query interface
//! - `services`: Period planning, fetching, aggregation and metrics
//! - `reports`: The P&L and cashflow statements
//! - `display` / `export`: Terminal, JSON, YAML and CSV output
//! - `cli`: Command handlers for the `finreport` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finreport::config::FinreportPaths;
//! use finreport::reports::ProfitAndLossReport;
//! use finreport::storage::Storage;
//!
//! let mut storage = Storage::new(FinreportPaths::new()?)?;
//! storage.load_all()?;
//! let report = ProfitAndLossReport::generate(&storage, start, end, "monthly", "All")?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinreportError, FinreportResult};
