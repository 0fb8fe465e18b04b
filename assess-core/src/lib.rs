//! Core types, errors, and configuration for the assessment scoring engine.
//!
//! Domain vocabulary: an **Item** is a gradable question, either
//! multiple-choice (`mcq`) or free-response (`constructed`). A **Form** binds
//! items into a test with per-item point values. A student **Attempt**
//! produces one **Response** per item, which the scoring service grades
//! against choice weights or rubric levels.

pub mod config;
pub mod errors;
pub mod tracing_setup;
pub mod types;

pub use config::AssessConfig;
pub use errors::{ConfigError, ScoringError, StorageError};
pub use types::{ItemKind, ScoringMetadata};
