//! Integration tests for the Chat Gateway
//!
//! These tests run the real server, the real Gemini client and the SDK
//! together, with Gemini replaced by a wiremock server:
//! - HTTP API contract
//! - Upstream failure classification end to end
//! - Client-side rendering of replies and failures

pub mod helpers;
pub mod mock_providers;

// Re-export commonly used items
pub use helpers::*;
pub use mock_providers::*;

#[cfg(test)]
mod api_tests;
#[cfg(test)]
mod e2e_tests;
