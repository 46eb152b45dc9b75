//! Storage initialization
//!
//! Handles first-run setup: directories, empty document files and a starter
//! category tree.

use crate::config::paths::FinreportPaths;
use crate::config::Settings;
use crate::error::FinreportError;
use crate::models::ExpenseCategory;

use super::categories::CategoryData;
use super::file_io::write_json_atomic;

/// Starter categories: `(top-level, subcategories)`
const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    ("Cost of Sales", &["Raw Materials", "Packaging", "Freight In"]),
    ("Staff", &["Salaries", "Benefits"]),
    ("Premises", &["Rent", "Electricity", "Water"]),
    ("Marketing", &[]),
    ("Equipment", &["Machinery", "Computers"]),
];

/// Initialize storage for a fresh installation
///
/// Existing files are left untouched.
pub fn initialize_storage(paths: &FinreportPaths) -> Result<(), FinreportError> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
    }

    if !paths.categories_file().exists() {
        create_default_categories(paths)?;
    }

    if !paths.income_file().exists() {
        write_json_atomic(paths.income_file(), &serde_json::json!({ "income": [] }))?;
    }

    if !paths.expenses_file().exists() {
        write_json_atomic(paths.expenses_file(), &serde_json::json!({ "expenses": [] }))?;
    }

    Ok(())
}

fn create_default_categories(paths: &FinreportPaths) -> Result<(), FinreportError> {
    let mut categories = Vec::new();

    for (parent_name, children) in DEFAULT_CATEGORIES {
        let parent = ExpenseCategory::new(*parent_name);
        let parent_id = parent.id;
        categories.push(parent);

        for child in children.iter() {
            categories.push(ExpenseCategory::new_child(*child, parent_id));
        }
    }

    for category in &categories {
        category.validate().map_err(|e| {
            FinreportError::Validation(format!("Category '{}': {}", category.name, e))
        })?;
    }

    write_json_atomic(paths.categories_file(), &CategoryData { categories })
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &FinreportPaths) -> bool {
    !paths.is_initialized()
}
