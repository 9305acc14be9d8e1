// Error types for gateway settings loading

use thiserror::Error;

/// Errors raised while loading or validating gateway settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required setting missing: {0}")]
    Missing(String),

    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Failed to read key file {path}: {source}")]
    KeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, ConfigError>;
