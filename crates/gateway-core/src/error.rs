//! Error taxonomy and error types for the gateway.
//!
//! [`ErrorCode`] is the closed enumeration every failure response carries.
//! [`GatewayError`] is what gateway code propagates internally before it is
//! converted into a [`crate::Failure`] at the HTTP boundary.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Closed set of error codes returned to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Message was missing or blank
    EmptyMessage,
    /// Requested model is not in the catalog
    InvalidModel,
    /// Provider quota or rate limit exhausted
    QuotaExceeded,
    /// Provider credential rejected
    ApiKeyInvalid,
    /// Provider safety policy rejected the content
    ContentBlocked,
    /// Provider call exceeded its deadline
    Timeout,
    /// Connectivity to the provider failed
    NetworkError,
    /// Provider does not serve the requested model
    ModelNotFound,
    /// Anything the classifier did not recognize
    UnknownError,
}

impl ErrorCode {
    /// All codes, in taxonomy order
    pub const ALL: [Self; 9] = [
        Self::EmptyMessage,
        Self::InvalidModel,
        Self::QuotaExceeded,
        Self::ApiKeyInvalid,
        Self::ContentBlocked,
        Self::Timeout,
        Self::NetworkError,
        Self::ModelNotFound,
        Self::UnknownError,
    ];

    /// Wire name of the code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyMessage => "EMPTY_MESSAGE",
            Self::InvalidModel => "INVALID_MODEL",
            Self::QuotaExceeded => "QUOTA_EXCEEDED",
            Self::ApiKeyInvalid => "API_KEY_INVALID",
            Self::ContentBlocked => "CONTENT_BLOCKED",
            Self::Timeout => "TIMEOUT",
            Self::NetworkError => "NETWORK_ERROR",
            Self::ModelNotFound => "MODEL_NOT_FOUND",
            Self::UnknownError => "UNKNOWN_ERROR",
        }
    }

    /// HTTP status the gateway answers with for this code
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::EmptyMessage | Self::InvalidModel | Self::ContentBlocked => {
                StatusCode::BAD_REQUEST
            }
            Self::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
            Self::ApiKeyInvalid => StatusCode::UNAUTHORIZED,
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::NetworkError => StatusCode::SERVICE_UNAVAILABLE,
            Self::ModelNotFound => StatusCode::NOT_FOUND,
            Self::UnknownError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing message for this code
    #[must_use]
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::EmptyMessage => "Message must not be empty",
            Self::InvalidModel => "The requested model is not available",
            Self::QuotaExceeded => "Gemini is at capacity right now, please try again later",
            Self::ApiKeyInvalid => "The API key is invalid or has expired",
            Self::ContentBlocked => {
                "Your message could not be processed because it was flagged by the safety policy"
            }
            Self::Timeout => "The request timed out, please try again later",
            Self::NetworkError => "Could not connect to the Gemini service",
            Self::ModelNotFound => "The Gemini model is not available",
            Self::UnknownError => "Something went wrong while processing the request",
        }
    }

    /// Whether the code comes from classifying a provider failure.
    ///
    /// Clients display messages for these codes verbatim.
    #[must_use]
    pub const fn is_provider_failure(self) -> bool {
        matches!(
            self,
            Self::QuotaExceeded
                | Self::ApiKeyInvalid
                | Self::ContentBlocked
                | Self::Timeout
                | Self::NetworkError
                | Self::ModelNotFound
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known error codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error code: {0}")]
pub struct ParseErrorCodeError(pub String);

impl FromStr for ErrorCode {
    type Err = ParseErrorCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| ParseErrorCodeError(s.to_string()))
    }
}

/// Errors raised inside the gateway
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// Message was missing or blank after trimming
    #[error("message is empty")]
    EmptyMessage,

    /// Model is not part of the catalog
    #[error("model not available: {model}")]
    InvalidModel {
        /// The rejected model identifier
        model: String,
    },

    /// Request body could not be decoded
    #[error("malformed request: {message}")]
    MalformedRequest {
        /// Decoder error text
        message: String,
    },

    /// Configuration is invalid
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the problem
        message: String,
    },
}

impl GatewayError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
