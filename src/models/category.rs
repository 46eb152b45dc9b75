//! Expense category model
//!
//! Categories form a two-level tree: top-level categories (no parent) and
//! subcategories whose parent is always a top-level category. A top-level
//! category may still receive postings directly.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::ids::CategoryId;
use crate::error::{FinreportError, FinreportResult};

/// An expense category node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name (unique per parent)
    pub name: String,

    /// Parent category, `None` for top-level categories
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
}

impl ExpenseCategory {
    /// Create a new top-level category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            parent_id: None,
        }
    }

    /// Create a new subcategory under `parent`
    pub fn new_child(name: impl Into<String>, parent: CategoryId) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            parent_id: Some(parent),
        }
    }

    /// Whether this category sits at the top of the tree
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if self.parent_id == Some(self.id) {
            return Err(CategoryValidationError::SelfParent);
        }

        Ok(())
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    SelfParent,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 100)", len)
            }
            Self::SelfParent => write!(f, "Category cannot be its own parent"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

/// Snapshot of the category tree, indexed by id
#[derive(Debug, Clone, Default)]
pub struct CategoryTree {
    by_id: HashMap<CategoryId, ExpenseCategory>,
}

impl CategoryTree {
    /// Build a tree from a flat category list, enforcing the two-level shape
    ///
    /// Names are checked on write, not here; a stored tree deeper than two
    /// levels is a storage fault.
    pub fn from_categories(categories: Vec<ExpenseCategory>) -> FinreportResult<Self> {
        let by_id: HashMap<CategoryId, ExpenseCategory> =
            categories.into_iter().map(|c| (c.id, c)).collect();

        for category in by_id.values() {
            let Some(parent_id) = category.parent_id else {
                continue;
            };
            if let Some(parent) = by_id.get(&parent_id) {
                if !parent.is_top_level() {
                    return Err(FinreportError::Storage(format!(
                        "Category '{}' is nested under subcategory '{}'; only two levels are allowed",
                        category.name, parent.name
                    )));
                }
            }
        }

        Ok(Self { by_id })
    }

    /// Look up a category by id
    pub fn get(&self, id: CategoryId) -> Option<&ExpenseCategory> {
        self.by_id.get(&id)
    }

    /// Name of the parent category, if `id` is a subcategory with a known parent
    pub fn parent_name(&self, id: CategoryId) -> Option<&str> {
        let parent_id = self.by_id.get(&id)?.parent_id?;
        self.by_id.get(&parent_id).map(|p| p.name.as_str())
    }

    /// Top-level categories sorted by name
    pub fn roots(&self) -> Vec<&ExpenseCategory> {
        let mut roots: Vec<_> = self.by_id.values().filter(|c| c.is_top_level()).collect();
        roots.sort_by(|a, b| a.name.cmp(&b.name));
        roots
    }

    /// Subcategories of `parent` sorted by name
    pub fn children(&self, parent: CategoryId) -> Vec<&ExpenseCategory> {
        let mut children: Vec<_> = self
            .by_id
            .values()
            .filter(|c| c.parent_id == Some(parent))
            .collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        children
    }

    /// Number of categories in the tree
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the tree holds no categories
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
