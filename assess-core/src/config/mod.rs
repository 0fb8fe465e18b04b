//! Configuration for the assessment engine.
//! TOML-based: project file over compiled defaults.

pub mod assess_config;
pub mod pagination_config;
pub mod storage_config;

pub use assess_config::AssessConfig;
pub use pagination_config::PaginationConfig;
pub use storage_config::StorageConfig;
