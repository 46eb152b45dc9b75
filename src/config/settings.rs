//! User settings for finreport
//!
//! Defaults applied to report requests when the caller leaves a parameter
//! out. Command-line flags always win over these.

use serde::{Deserialize, Serialize};

use super::paths::FinreportPaths;
use crate::error::FinreportError;
use crate::models::Granularity;

/// User settings for finreport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Report format used when none is given
    #[serde(default)]
    pub default_format: Granularity,

    /// Location filter used when none is given ("All" = no filter)
    #[serde(default = "default_location")]
    pub default_location: String,

    /// Opening cash balance used by cashflow reports when none is given
    #[serde(default)]
    pub default_opening_balance: f64,

    /// Currency symbol for terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// strftime format for dates given on the command line
    #[serde(default = "default_input_date_format")]
    pub input_date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_location() -> String {
    crate::services::ALL_LOCATIONS.to_string()
}

fn default_currency() -> String {
    "฿".to_string()
}

fn default_input_date_format() -> String {
    "%d/%m/%Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_format: Granularity::default(),
            default_location: default_location(),
            default_opening_balance: 0.0,
            currency_symbol: default_currency(),
            input_date_format: default_input_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinreportPaths) -> Result<Self, FinreportError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinreportError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinreportError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinreportPaths) -> Result<(), FinreportError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinreportError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinreportError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
