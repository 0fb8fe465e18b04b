//! Top-level configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{PaginationConfig, StorageConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Project config (`assess.toml` in the project root)
/// 2. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AssessConfig {
    pub storage: StorageConfig,
    pub pagination: PaginationConfig,
}

impl AssessConfig {
    /// Load configuration from `assess.toml` under `root`, falling back to
    /// compiled defaults when the file is absent.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join("assess.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no project config, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the final config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.read_pool_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "storage.read_pool_size must be at least 1".to_string(),
            });
        }
        if self.pagination.default_page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "pagination.default_page_size must be at least 1".to_string(),
            });
        }
        if self.pagination.default_page_size > self.pagination.max_page_size {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "pagination.default_page_size {} exceeds max_page_size {}",
                    self.pagination.default_page_size, self.pagination.max_page_size
                ),
            });
        }
        Ok(())
    }
}
