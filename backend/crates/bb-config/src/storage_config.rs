use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_FILE, DEFAULT_WORLDS_DIR};

use std::path::Path;

use serde::Deserialize;

/// On-disk locations, relative to the root directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub worlds_dir: String,
    /// Append-only session log shared by every server session of this deployment
    pub log_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            worlds_dir: String::from(DEFAULT_WORLDS_DIR),
            log_file: String::from(DEFAULT_LOG_FILE),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::validate_relative("storage.worlds_dir", &self.worlds_dir)?;
        Self::validate_relative("storage.log_file", &self.log_file)?;
        Ok(())
    }

    fn validate_relative(field: &str, value: &str) -> ConfigErrorResult<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::storage(format!("{field} must not be empty")));
        }

        if Path::new(value).is_absolute() || value.contains("..") {
            return Err(ConfigError::storage(format!(
                "{field} must be relative and cannot contain '..'"
            )));
        }

        Ok(())
    }
}
