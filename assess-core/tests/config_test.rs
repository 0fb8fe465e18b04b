//! Tests for the configuration system.

use assess_core::config::AssessConfig;
use assess_core::errors::ConfigError;

/// Helper: create a temporary directory.
fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

#[test]
fn defaults_when_no_file() {
    let dir = tempdir();
    let config = AssessConfig::load(dir.path()).unwrap();
    assert_eq!(config.storage.path.to_str(), Some("assess.db"));
    assert_eq!(config.storage.read_pool_size, 4);
    assert_eq!(config.pagination.default_page_size, 25);
    assert_eq!(config.pagination.max_page_size, 100);
}

#[test]
fn project_file_overrides_defaults() {
    let dir = tempdir();
    std::fs::write(
        dir.path().join("assess.toml"),
        r#"
[storage]
path = "data/reading.db"
read_pool_size = 2

[pagination]
default_page_size = 10
"#,
    )
    .unwrap();

    let config = AssessConfig::load(dir.path()).unwrap();
    assert_eq!(config.storage.path.to_str(), Some("data/reading.db"));
    assert_eq!(config.storage.read_pool_size, 2);
    assert_eq!(config.pagination.default_page_size, 10);
    // Unspecified fields keep their defaults.
    assert_eq!(config.pagination.max_page_size, 100);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempdir();
    std::fs::write(dir.path().join("assess.toml"), "[storage\npath = ").unwrap();

    let err = AssessConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn default_page_size_above_max_rejected() {
    let dir = tempdir();
    std::fs::write(
        dir.path().join("assess.toml"),
        r#"
[pagination]
default_page_size = 500
max_page_size = 100
"#,
    )
    .unwrap();

    let err = AssessConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn zero_pool_size_rejected() {
    let dir = tempdir();
    std::fs::write(
        dir.path().join("assess.toml"),
        r#"
[storage]
read_pool_size = 0
"#,
    )
    .unwrap();

    let err = AssessConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
