//! Route definitions for the gateway API.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware, state::AppState};

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        // Apply middleware
        .layer(middleware::trace_layer())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(middleware::cors_layer())
        // Add state
        .with_state(state)
}

/// Chat and health routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(handlers::chat))
        .route("/health", get(handlers::health_check))
}
