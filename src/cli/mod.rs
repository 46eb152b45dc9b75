//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report engine.

pub mod category;
pub mod report;

pub use category::handle_categories_command;
pub use report::{handle_report_command, Emit, ReportArgs, ReportCommands};
