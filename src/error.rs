//! Error types for schema construction and configuration

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Schema builder errors
///
/// Validation failures are not represented here: [`crate::SchemaDocument::validate`]
/// hands back the validator's own error untouched.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Enum should have at least one value")]
    EmptyEnum,

    #[error("Configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
