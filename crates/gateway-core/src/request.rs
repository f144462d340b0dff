//! Request types for the gateway.

use crate::catalog::ModelCatalog;
use crate::error::{GatewayError, GatewayResult};
use serde::{Deserialize, Serialize};

/// Chat request as received from a client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// User text; a missing or null message is treated as empty
    #[serde(default)]
    pub message: Option<String>,

    /// Target model; the catalog default is used when absent or null
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ChatRequest {
    /// Create a request for the default model
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            model: None,
        }
    }

    /// Set the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Validate the request against the catalog.
    ///
    /// The message is checked before the model.
    ///
    /// # Errors
    /// Returns [`GatewayError::EmptyMessage`] or [`GatewayError::InvalidModel`]
    pub fn validate(self, catalog: &ModelCatalog) -> GatewayResult<ValidatedRequest> {
        let message = match self.message {
            Some(message) if !message.trim().is_empty() => message,
            _ => return Err(GatewayError::EmptyMessage),
        };

        let model = self
            .model
            .unwrap_or_else(|| catalog.default_model().to_string());

        if !catalog.contains(&model) {
            return Err(GatewayError::InvalidModel { model });
        }

        Ok(ValidatedRequest { message, model })
    }
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// User text, exactly as received
    pub message: String,
    /// Catalog member to call
    pub model: String,
}
