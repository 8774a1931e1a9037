//! User settings for moneygrid
//!
//! Manages user preferences for currency display, date parsing,
//! and report grouping.

use serde::{Deserialize, Serialize};

use super::paths::AppPaths;
use crate::error::GridError;
use crate::reports::DEFAULT_GROUP_LIMIT;

/// User settings for moneygrid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format tried first when parsing Date cells (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many description groups the grouping report keeps
    #[serde(default = "default_group_limit")]
    pub group_limit: usize,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_group_limit() -> usize {
    DEFAULT_GROUP_LIMIT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            group_limit: default_group_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &AppPaths) -> Result<Self, GridError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| GridError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| GridError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AppPaths) -> Result<(), GridError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| GridError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| GridError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
