//! The set of models the gateway accepts.

use crate::error::{GatewayError, GatewayResult};
use std::collections::BTreeSet;

/// Models accepted when no catalog is configured
pub const DEFAULT_MODELS: [&str; 4] = [
    "gemini-2.5-flash",
    "gemini-2.0-flash",
    "gemini-1.5-pro",
    "gemini-1.5-flash",
];

/// Model used when a request does not name one
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Immutable catalog of allowed model identifiers.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCatalog {
    models: BTreeSet<String>,
    default_model: String,
}

impl ModelCatalog {
    /// Create a catalog from a list of models and a preferred default.
    ///
    /// # Errors
    /// Returns error if the list is empty or the default is not in it
    pub fn new<I, S>(models: I, default_model: impl Into<String>) -> GatewayResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let models: BTreeSet<String> = models
            .into_iter()
            .map(Into::into)
            .filter(|m: &String| !m.trim().is_empty())
            .collect();
        let default_model = default_model.into();

        if models.is_empty() {
            return Err(GatewayError::configuration("model catalog is empty"));
        }

        if !models.contains(&default_model) {
            return Err(GatewayError::configuration(format!(
                "default model {default_model} is not in the catalog"
            )));
        }

        Ok(Self {
            models,
            default_model,
        })
    }

    /// Whether the model is allowed
    #[must_use]
    pub fn contains(&self, model: &str) -> bool {
        self.models.contains(model)
    }

    /// The preferred model
    #[must_use]
    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Iterate over allowed models in sorted order
    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(String::as_str)
    }

    /// Number of allowed models
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Always false for a constructed catalog
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self {
            models: DEFAULT_MODELS.iter().map(|m| (*m).to_string()).collect(),
            default_model: DEFAULT_MODEL.to_string(),
        }
    }
}
