//! # Gateway Server
//!
//! HTTP server implementation for the Chat Gateway.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - `POST /api/chat` and `GET /api/health`
//! - The uniform success/failure envelope on every answer
//! - Request id, tracing and CORS middleware
//! - Graceful shutdown handling

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod shutdown;
pub mod state;

// Re-export main types
pub use error::{ApiError, ServerError};
pub use handlers::HealthResponse;
pub use routes::create_router;
pub use server::{Server, ServerConfig};
pub use shutdown::shutdown_signal;
pub use state::{AppState, AppStateBuilder};
