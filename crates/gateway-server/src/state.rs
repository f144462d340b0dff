//! Application state shared across handlers.

use gateway_config::GatewayConfig;
use gateway_core::{ErrorClassifier, GenerativeProvider, ModelCatalog};
use gateway_providers::{GoogleConfig, GoogleProvider};
use std::sync::Arc;
use std::time::Instant;

use crate::error::ServerError;

/// Application state
///
/// Everything in here is immutable after startup; cloning only bumps `Arc`s.
#[derive(Clone)]
pub struct AppState {
    /// Models clients may request
    pub catalog: Arc<ModelCatalog>,
    /// Upstream generative service
    pub provider: Arc<dyn GenerativeProvider>,
    /// Upstream error classifier
    pub classifier: Arc<ErrorClassifier>,
    /// Include raw upstream error text in failure responses
    pub expose_details: bool,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("catalog", &self.catalog)
            .field("provider", &self.provider.id())
            .field("expose_details", &self.expose_details)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create a new state builder
    #[must_use]
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::default()
    }

    /// Build the state from configuration, wiring up the Gemini provider.
    ///
    /// # Errors
    /// Returns error if the catalog is invalid or the provider cannot be built
    pub fn from_config(config: &GatewayConfig) -> Result<Self, ServerError> {
        let provider_config = GoogleConfig::new("google", config.provider.api_key.clone())
            .with_base_url(config.provider.base_url.clone())
            .with_timeout(config.provider.timeout);
        let provider = GoogleProvider::new(provider_config)?;

        Self::builder()
            .catalog(config.catalog()?)
            .provider(Arc::new(provider))
            .expose_details(config.expose_error_details())
            .build()
    }

    /// Seconds since the state was built
    #[must_use]
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Builder for [`AppState`]
#[derive(Default)]
pub struct AppStateBuilder {
    catalog: Option<ModelCatalog>,
    provider: Option<Arc<dyn GenerativeProvider>>,
    classifier: Option<ErrorClassifier>,
    expose_details: bool,
}

impl AppStateBuilder {
    /// Set the model catalog (defaults to the built-in catalog)
    #[must_use]
    pub fn catalog(mut self, catalog: ModelCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set the provider
    #[must_use]
    pub fn provider(mut self, provider: Arc<dyn GenerativeProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the error classifier (defaults to the standard table)
    #[must_use]
    pub fn classifier(mut self, classifier: ErrorClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Expose raw error details to clients
    #[must_use]
    pub fn expose_details(mut self, expose: bool) -> Self {
        self.expose_details = expose;
        self
    }

    /// Build the state.
    ///
    /// # Errors
    /// Returns error if no provider was set
    pub fn build(self) -> Result<AppState, ServerError> {
        let provider = self.provider.ok_or(ServerError::MissingState("provider"))?;

        Ok(AppState {
            catalog: Arc::new(self.catalog.unwrap_or_default()),
            provider,
            classifier: Arc::new(self.classifier.unwrap_or_default()),
            expose_details: self.expose_details,
            started_at: Instant::now(),
        })
    }
}
