//! HTTP request handlers for the gateway API.

use axum::{extract::State, Json};
use gateway_core::{ChatRequest, ChatResponse, Failure};
use serde::Serialize;
use std::time::Instant;
use tracing::{error, info, instrument, warn, Instrument, Span};

use crate::{
    error::ApiError,
    extractors::{BodyRejection, JsonBody, RequestId},
    state::AppState,
};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Version
    pub version: String,
    /// Uptime in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_seconds: Option<u64>,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: Some(state.uptime_seconds()),
    })
}

/// Chat endpoint.
///
/// Validates locally, makes exactly one provider call, and classifies any
/// provider failure into the error taxonomy. An undecodable body is answered
/// with the failure envelope, with the decoder text as `details` in
/// development.
#[instrument(skip_all, fields(request_id = %request_id, model = tracing::field::Empty))]
pub async fn chat(
    State(state): State<AppState>,
    RequestId(request_id): RequestId,
    body: Result<JsonBody<ChatRequest>, BodyRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let start = Instant::now();

    let JsonBody(body) = body.map_err(|rejection| {
        warn!(error = %rejection, "Rejected chat request body");
        rejection.into_api_error(state.expose_details)
    })?;

    let request = body.validate(&state.catalog).map_err(|e| {
        warn!(error = %e, "Rejected chat request");
        ApiError::from(&e)
    })?;

    Span::current().record("model", request.model.as_str());

    let result = state
        .provider
        .generate(&request.model, &request.message)
        .instrument(gateway_telemetry::provider_span!(
            state.provider.id(),
            request.model
        ))
        .await;

    let duration_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(reply) => {
            info!(
                duration_ms = duration_ms,
                reply_chars = reply.chars().count(),
                "Chat request completed"
            );
            Ok(Json(ChatResponse::success(reply)))
        }
        Err(err) => {
            let classification = state.classifier.classify(&err.message);

            error!(
                error = %err,
                code = %classification.code,
                duration_ms = duration_ms,
                "Provider request failed"
            );

            Err(Failure::from(classification)
                .with_details(err.message, state.expose_details)
                .into())
        }
    }
}
