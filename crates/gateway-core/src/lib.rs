//! # Gateway Core
//!
//! Core types, traits, and error handling for the Chat Gateway.
//!
//! This crate provides the foundational types used throughout the gateway:
//! - The chat request and the uniform response envelope
//! - The closed error-code taxonomy and the upstream error classifier
//! - The immutable model catalog
//! - The generative provider trait

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod classify;
pub mod error;
pub mod provider;
pub mod request;
pub mod response;

// Re-export commonly used types
pub use catalog::{ModelCatalog, DEFAULT_MODEL, DEFAULT_MODELS};
pub use classify::{Classification, ClassificationRule, ErrorClassifier};
pub use error::{ErrorCode, GatewayError, GatewayResult, ParseErrorCodeError};
pub use provider::{GenerativeProvider, ProviderError};
pub use request::{ChatRequest, ValidatedRequest};
pub use response::{ChatResponse, Failure};
