//! Expense category repository for JSON storage
//!
//! Manages loading and saving the category tree to categories.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinreportError;
use crate::models::{CategoryId, ExpenseCategory};

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    #[serde(default)]
    pub categories: Vec<ExpenseCategory>,
}

/// Repository for expense category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<HashMap<CategoryId, ExpenseCategory>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), FinreportError> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut categories = self
            .categories
            .write()
            .map_err(|e| FinreportError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.clear();
        for category in file_data.categories {
            categories.insert(category.id, category);
        }

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), FinreportError> {
        let file_data = CategoryData {
            categories: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<ExpenseCategory>, FinreportError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| FinreportError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.get(&id).cloned())
    }

    /// Get all categories, top-level first, then by name
    pub fn get_all(&self) -> Result<Vec<ExpenseCategory>, FinreportError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| FinreportError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = categories.values().cloned().collect();
        list.sort_by(|a, b| {
            a.parent_id
                .is_some()
                .cmp(&b.parent_id.is_some())
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(list)
    }

    /// Get a category by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<ExpenseCategory>, FinreportError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| FinreportError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(categories
            .values()
            .find(|c| c.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Insert or update a category after validating it
    pub fn upsert(&self, category: ExpenseCategory) -> Result<(), FinreportError> {
        category.validate().map_err(|e| {
            FinreportError::Validation(format!("Category '{}': {}", category.name, e))
        })?;

        let mut categories = self
            .categories
            .write()
            .map_err(|e| FinreportError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.insert(category.id, category);
        Ok(())
    }

    /// Count categories
    pub fn count(&self) -> Result<usize, FinreportError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| FinreportError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CategoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        let repo = CategoryRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_top_level_sorted_first() {
        let (_temp_dir, repo) = create_test_repo();
        let utilities = ExpenseCategory::new("Utilities");
        let electricity = ExpenseCategory::new_child("Electricity", utilities.id);
        let admin = ExpenseCategory::new("Admin");

        repo.upsert(electricity).unwrap();
        repo.upsert(utilities).unwrap();
        repo.upsert(admin).unwrap();

        let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Admin", "Utilities", "Electricity"]);
    }

    #[test]
    fn test_upsert_rejects_invalid_name() {
        let (_temp_dir, repo) = create_test_repo();
        let err = repo.upsert(ExpenseCategory::new("x".repeat(101))).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_get_by_name() {
        let (_temp_dir, repo) = create_test_repo();
        let rent = ExpenseCategory::new("Rent");
        let id = rent.id;
        repo.upsert(rent).unwrap();

        let found = repo.get_by_name("rent").unwrap().unwrap();
        assert_eq!(found.id, id);
        assert!(repo.get_by_name("Travel").unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let materials = ExpenseCategory::new("Materials");
        let id = materials.id;
        repo.upsert(materials).unwrap();
        repo.save().unwrap();

        let repo2 = CategoryRepository::new(temp_dir.path().join("categories.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(id).unwrap().unwrap().name, "Materials");
    }
}
