//! # Gateway Telemetry
//!
//! Structured logging for the Chat Gateway.
//!
//! This crate provides:
//! - `tracing` subscriber setup with `EnvFilter`
//! - Human-readable or JSON log output
//! - Span helpers for chat requests and provider calls

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod logging;

// Re-export main types
pub use logging::{init_logging, LoggingConfig, TelemetryError};
