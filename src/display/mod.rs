//! Display formatting for terminal output
//!
//! Renders statements as grids and the category tree as an indented list.

pub mod category;
pub mod report;

pub use category::format_category_tree;
pub use report::{format_amount, format_statement};
