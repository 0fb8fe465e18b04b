//! Storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// SQLite storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file path.
    pub path: PathBuf,
    /// Number of read-only connections in the read pool.
    pub read_pool_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("assess.db"),
            read_pool_size: 4,
        }
    }
}
