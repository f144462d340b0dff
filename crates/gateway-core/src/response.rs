//! The uniform response envelope.
//!
//! Every gateway answer is exactly one of [`ChatResponse::Success`] or
//! [`ChatResponse::Failure`]. On the wire:
//!
//! ```json
//! { "success": true, "reply": "..." }
//! { "success": false, "error": "...", "errorCode": "TIMEOUT", "details": "..." }
//! ```

use crate::classify::Classification;
use crate::error::{ErrorCode, GatewayError};
use http::StatusCode;
use serde::ser::{Serialize, Serializer};

/// Gateway response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatResponse {
    /// Provider replied
    Success {
        /// Provider text, untouched
        reply: String,
    },
    /// Request failed
    Failure(Failure),
}

impl ChatResponse {
    /// Create a success response
    pub fn success(reply: impl Into<String>) -> Self {
        Self::Success {
            reply: reply.into(),
        }
    }

    /// HTTP status for this response
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Success { .. } => StatusCode::OK,
            Self::Failure(failure) => failure.status,
        }
    }

    /// Whether this is a success
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<Failure> for ChatResponse {
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}

/// Failure half of the envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// User-facing message
    pub error: String,
    /// Taxonomy code
    pub code: ErrorCode,
    /// HTTP status (not serialized)
    pub status: StatusCode,
    /// Raw error text, only set in development
    pub details: Option<String>,
}

impl Failure {
    /// Failure with the code's default status and message
    #[must_use]
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            error: code.user_message().to_string(),
            code,
            status: code.status_code(),
            details: None,
        }
    }

    /// Override the HTTP status
    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Attach raw detail when `expose` is set
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>, expose: bool) -> Self {
        self.details = expose.then(|| details.into());
        self
    }
}

impl From<Classification> for Failure {
    fn from(classification: Classification) -> Self {
        Self {
            error: classification.message.to_string(),
            code: classification.code,
            status: classification.status,
            details: None,
        }
    }
}

impl From<&GatewayError> for Failure {
    /// Map errors that are detected locally.
    ///
    /// Provider failures never pass through here; they are classified by
    /// [`crate::ErrorClassifier`].
    fn from(err: &GatewayError) -> Self {
        match err {
            GatewayError::EmptyMessage => Self::from_code(ErrorCode::EmptyMessage),
            GatewayError::InvalidModel { .. } => Self::from_code(ErrorCode::InvalidModel),
            GatewayError::MalformedRequest { .. } => Self {
                error: "Request body is not valid JSON".to_string(),
                ..Self::from_code(ErrorCode::UnknownError)
            }
            .with_status(StatusCode::BAD_REQUEST),
            GatewayError::Configuration { .. } => Self::from_code(ErrorCode::UnknownError),
        }
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}

impl Serialize for ChatResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let envelope = match self {
            Self::Success { reply } => Envelope {
                success: true,
                reply: Some(reply),
                error: None,
                error_code: None,
                details: None,
            },
            Self::Failure(failure) => Envelope {
                success: false,
                reply: None,
                error: Some(&failure.error),
                error_code: Some(failure.code),
                details: failure.details.as_deref(),
            },
        };
        envelope.serialize(serializer)
    }
}
