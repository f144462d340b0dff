//! HTTP middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use http::{HeaderName, HeaderValue};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::extractors::RequestId;

/// Header carrying the request id in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Make sure every request has an id and echo it on the response.
///
/// A client-supplied id is kept when it is non-empty visible ASCII; otherwise
/// a uuid is generated. The chosen id is stored in the request extensions,
/// where [`RequestId`] picks it up.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);

    let client_id = request
        .headers()
        .get(&header)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(String::from);

    let id = client_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let Ok(value) = HeaderValue::from_str(&id) else {
        return next.run(request).await;
    };

    request.headers_mut().insert(header.clone(), value.clone());
    request.extensions_mut().insert(RequestId(id));

    let mut response = next.run(request).await;
    response.headers_mut().insert(header, value);
    response
}

/// Permissive CORS: any origin, method and header
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// HTTP access log
pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}
