//! Provider abstraction.

use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a provider.
///
/// Carries only an unstructured description; the gateway classifies it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProviderError {
    /// Human readable error text
    pub message: String,
}

impl ProviderError {
    /// Create a provider error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A generative text service
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Provider identifier, used in logs
    fn id(&self) -> &str;

    /// Generate a single, non-streaming completion for `prompt` with `model`
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, ProviderError>;
}
