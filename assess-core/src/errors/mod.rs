//! Error handling for the assessment engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod scoring_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use scoring_error::{MissingInput, ScoringError};
pub use storage_error::StorageError;
