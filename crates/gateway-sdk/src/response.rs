//! Response types for the Gateway SDK.

use gateway_core::ErrorCode;
use serde::Deserialize;

/// Result of one chat exchange.
///
/// There is always a value to render: transport problems and unreadable
/// bodies arrive as a synthesized `NETWORK_ERROR` failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// The gateway returned a reply.
    Success {
        /// Reply text, untouched.
        reply: String,
    },
    /// The gateway (or the transport) reported a failure.
    Failure(FailureReply),
}

impl ChatOutcome {
    /// Check if the exchange succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the reply text, if any.
    pub fn reply(&self) -> Option<&str> {
        match self {
            Self::Success { reply } => Some(reply),
            Self::Failure(_) => None,
        }
    }

    /// Get the failure, if any.
    pub fn failure(&self) -> Option<&FailureReply> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Turn a decoded envelope into an outcome.
    ///
    /// Returns `None` when the envelope is internally inconsistent.
    pub(crate) fn from_envelope(envelope: Envelope, status: u16) -> Option<Self> {
        if envelope.success {
            return envelope.reply.map(|reply| Self::Success { reply });
        }

        Some(Self::Failure(FailureReply {
            error: envelope.error?,
            error_code: envelope
                .error_code
                .unwrap_or_else(|| ErrorCode::UnknownError.as_str().to_string()),
            details: envelope.details,
            status: Some(status),
        }))
    }
}

/// Failure half of the envelope, as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReply {
    /// User-facing message.
    pub error: String,
    /// Error code as sent by the gateway.
    pub error_code: String,
    /// Raw upstream text (development gateways only).
    pub details: Option<String>,
    /// HTTP status, absent when the gateway was never reached.
    pub status: Option<u16>,
}

impl FailureReply {
    /// Synthesize a network failure for a request that got no usable answer.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            error_code: ErrorCode::NetworkError.as_str().to_string(),
            details: None,
            status: None,
        }
    }

    /// The error code, if it is one this client knows.
    pub fn code(&self) -> Option<ErrorCode> {
        self.error_code.parse().ok()
    }
}

/// Wire envelope from `POST /api/chat`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Envelope {
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) reply: Option<String>,
    #[serde(default)]
    pub(crate) error: Option<String>,
    #[serde(default)]
    pub(crate) error_code: Option<String>,
    #[serde(default)]
    pub(crate) details: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Gateway version.
    #[serde(default)]
    pub version: Option<String>,
    /// Uptime in seconds.
    #[serde(default)]
    pub uptime_seconds: Option<u64>,
}

impl HealthResponse {
    /// Check if the gateway reports itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
