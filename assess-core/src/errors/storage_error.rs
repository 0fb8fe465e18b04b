//! Storage errors.

/// Errors that can occur in the SQLite persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("column {column} holds non-decimal value {value:?}")]
    InvalidDecimal { column: &'static str, value: String },

    #[error("scoring metadata failed to deserialize: {message}")]
    InvalidMetadata { message: String },
}
