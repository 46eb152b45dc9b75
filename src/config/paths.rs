//! Path management for finreport
//!
//! ## Path Resolution Order
//!
//! 1. `FINREPORT_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `finreport` (via `directories`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinreportError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FINREPORT_DATA_DIR";

/// Manages all paths used by finreport
#[derive(Debug, Clone)]
pub struct FinreportPaths {
    /// Base directory for all finreport data
    base_dir: PathBuf,
}

impl FinreportPaths {
    /// Create a new FinreportPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined.
    pub fn new() -> Result<Self, FinreportError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "finreport")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    FinreportError::Config("Could not determine a config directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create FinreportPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to income.json
    pub fn income_file(&self) -> PathBuf {
        self.data_dir().join("income.json")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Get the path to categories.json
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FinreportError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinreportError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinreportError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if finreport has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
