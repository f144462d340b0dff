//! Logging setup.
//!
//! `RUST_LOG` takes precedence over the configured level so operators can turn
//! up verbosity without touching the config file.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `info` or `gateway_server=debug`
    pub level: String,
    /// Emit JSON lines
    pub json: bool,
    /// Include the event target (module path)
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Enable or disable JSON output
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Show or hide event targets
    #[must_use]
    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }
}

/// Install the global subscriber.
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init_logging(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = config.filter();

    let fmt_layer = if config.json {
        fmt::layer()
            .json()
            .with_target(config.with_target)
            .with_current_span(true)
            .boxed()
    } else {
        fmt::layer().with_target(config.with_target).boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))
}

/// Telemetry initialization error
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize the subscriber
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Create a span for a provider call
#[macro_export]
macro_rules! provider_span {
    ($provider:expr, $model:expr) => {
        tracing::debug_span!(
            "provider_call",
            provider = %$provider,
            model = %$model,
        )
    };
}
