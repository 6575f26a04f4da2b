use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BUSY_TIMEOUT_SECS, DEFAULT_DATABASE_FILENAME,
    DEFAULT_SCHEMA_VERSION,
};

use std::path::Path;

use serde::Deserialize;

/// Where the credential store lives and how it is opened
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Store file, relative to the config directory
    pub path: String,
    /// Seconds to wait on a lock held by another connection
    pub busy_timeout_secs: u64,
    /// Schema version this build opens the store at
    pub schema_version: i64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            busy_timeout_secs: DEFAULT_BUSY_TIMEOUT_SECS,
            schema_version: DEFAULT_SCHEMA_VERSION,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::database("database.path must not be empty"));
        }

        // Must not escape the config dir
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if self.schema_version < 1 {
            return Err(ConfigError::database(format!(
                "database.schema_version must be >= 1, got {}",
                self.schema_version
            )));
        }

        Ok(())
    }
}
