//! Configuration module for finreport
//!
//! - Base directory resolution
//! - User settings persistence (report defaults)

pub mod paths;
pub mod settings;

pub use paths::FinreportPaths;
pub use settings::Settings;
