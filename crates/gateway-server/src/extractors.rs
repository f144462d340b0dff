//! Custom Axum extractors for the gateway.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use gateway_core::{Failure, GatewayError};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::error::ApiError;
use crate::middleware::REQUEST_ID_HEADER;

/// Request id for the current request.
///
/// Taken from the request extensions when [`crate::middleware::request_id_middleware`]
/// ran, so handlers see the same id that is echoed on the response. Without
/// the middleware the header is read directly, or a fresh id is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(id) = parts.extensions.get::<Self>() {
            return Ok(id.clone());
        }

        let id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map_or_else(|| uuid::Uuid::new_v4().to_string(), String::from);

        Ok(Self(id))
    }
}

/// JSON body extractor that answers with the failure envelope
///
/// An empty body is read as `{}`. Unreadable bodies and JSON that does not
/// match `T` are rejected with a [`BodyRejection`].
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

/// Rejection for [`JsonBody`]
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct BodyRejection {
    /// Decoder error text
    pub message: String,
}

impl BodyRejection {
    /// Failure envelope for this rejection, carrying the decoder text as
    /// `details` when `expose_details` is set.
    #[must_use]
    pub fn into_api_error(self, expose_details: bool) -> ApiError {
        let failure = Failure::from(&GatewayError::MalformedRequest {
            message: self.message.clone(),
        });

        failure.with_details(self.message, expose_details).into()
    }
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        self.into_api_error(false).into_response()
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = axum::body::Bytes::from_request(req, state)
            .await
            .map_err(|e| BodyRejection {
                message: format!("Failed to read request body: {e}"),
            })?;

        let bytes: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &bytes
        };

        let value: T = serde_json::from_slice(bytes).map_err(|e| {
            debug!(error = %e, "JSON parse error");
            BodyRejection {
                message: format!("Invalid JSON: {e}"),
            }
        })?;

        Ok(Self(value))
    }
}
