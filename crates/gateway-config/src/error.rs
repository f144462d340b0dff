//! Configuration error types.

use std::path::PathBuf;

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Configuration error type.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed.
    #[error("Failed to parse config file {path}: {message}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Parser error text
        message: String,
    },

    /// Config file extension is not recognized.
    #[error("Unsupported config format: {0} (expected .toml, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    /// An environment variable holds an unusable value.
    #[error("Invalid value for {var}: {value}")]
    InvalidEnv {
        /// Variable name
        var: String,
        /// Offending value
        value: String,
    },

    /// The merged configuration is inconsistent.
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

impl ConfigError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
