//! Error types for the Gateway SDK.
//!
//! Chat exchanges never surface these: [`crate::Client::send_message`] folds
//! every failure into a [`crate::ChatOutcome`]. They are used for client
//! construction and the health probe.

use thiserror::Error;

/// Result type for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the Gateway SDK.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error during client setup.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue.
        message: String,
    },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an unexpected status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body or status text.
        message: String,
    },

    /// Response parsing failed.
    #[error("Failed to parse response: {message}")]
    ParseError {
        /// Error message describing the parse failure.
        message: String,
    },

    /// Timeout waiting for response.
    #[error("Request timed out after {duration_ms}ms")]
    Timeout {
        /// Duration in milliseconds before timeout.
        duration_ms: u64,
    },

    /// Connection error.
    #[error("Connection error: {message}")]
    Connection {
        /// Error message describing the connection error.
        message: String,
    },
}

impl Error {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// Check if the gateway could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Connection { .. } | Self::Timeout { .. })
    }
}
