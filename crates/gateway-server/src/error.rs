//! Error types for the HTTP layer.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use gateway_core::{ChatResponse, ErrorCode, Failure, GatewayError};
use http::StatusCode;
use std::net::SocketAddr;
use thiserror::Error;

/// A failure on its way out to the client.
///
/// Renders as the failure envelope with the failure's HTTP status, so every
/// error path through the router produces the same JSON shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Envelope contents
    pub failure: Failure,
}

impl ApiError {
    /// Create an API error from a failure
    #[must_use]
    pub fn new(failure: Failure) -> Self {
        Self { failure }
    }

    /// Failure for a taxonomy code with its default status and message
    #[must_use]
    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(Failure::from_code(code))
    }

    /// HTTP status
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.failure.status
    }

    /// Taxonomy code
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.failure.code
    }
}

impl From<Failure> for ApiError {
    fn from(failure: Failure) -> Self {
        Self::new(failure)
    }
}

impl From<&GatewayError> for ApiError {
    fn from(err: &GatewayError) -> Self {
        Self::new(Failure::from(err))
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self::from(&err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.failure.status;
        (status, Json(ChatResponse::Failure(self.failure))).into_response()
    }
}

/// Errors that stop the server from starting or serving
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] gateway_config::ConfigError),

    /// Provider could not be constructed
    #[error("Provider setup failed: {0}")]
    Provider(#[from] GatewayError),

    /// Required state was not supplied to the builder
    #[error("Missing application state: {0}")]
    MissingState(&'static str),

    /// Listen address could not be parsed
    #[error("Invalid listen address {address}: {message}")]
    InvalidAddress {
        /// The address as configured
        address: String,
        /// Parser message
        message: String,
    },

    /// Bind failed
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address we tried to bind
        addr: SocketAddr,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Server loop failed
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
