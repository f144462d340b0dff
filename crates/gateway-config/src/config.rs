//! Configuration types.

use crate::error::{ConfigError, ConfigResult};
use gateway_core::{ModelCatalog, DEFAULT_MODEL, DEFAULT_MODELS};
use secrecy::SecretString;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Top-level gateway configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener settings
    pub server: ServerSettings,
    /// Deployment environment
    pub environment: Environment,
    /// Upstream provider settings
    pub provider: ProviderSettings,
    /// Model catalog
    pub models: ModelSettings,
    /// Log output
    pub logging: LoggingSettings,
}

impl GatewayConfig {
    /// Apply overrides from environment variables.
    ///
    /// `lookup` is usually `|k| std::env::var(k).ok()`.
    ///
    /// # Errors
    /// Returns error if a variable has an unparseable value
    pub fn apply_env<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("GEMINI_API_KEY").filter(|k| !k.is_empty()) {
            self.provider.api_key = Some(SecretString::new(key));
        }

        if let Some(port) = lookup("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "PORT".to_string(),
                value: port.clone(),
            })?;
        }

        if let Some(host) = lookup("GATEWAY_HOST") {
            self.server.host = host;
        }

        if let Some(env) = lookup("GATEWAY_ENV") {
            self.environment = env.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "GATEWAY_ENV".to_string(),
                value: env.clone(),
            })?;
        }

        if let Some(base_url) = lookup("GEMINI_BASE_URL") {
            self.provider.base_url = base_url;
        }

        if let Some(level) = lookup("GATEWAY_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(json) = lookup("GATEWAY_LOG_JSON") {
            self.logging.json = matches!(json.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }

        Ok(())
    }

    /// Check the configuration for consistency.
    ///
    /// # Errors
    /// Returns error on a zero port, bad provider URL or inconsistent catalog
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::validation("server.port must be non-zero"));
        }

        Url::parse(&self.provider.base_url).map_err(|e| {
            ConfigError::validation(format!(
                "provider.base_url is not a valid URL ({}): {e}",
                self.provider.base_url
            ))
        })?;

        self.catalog()?;

        Ok(())
    }

    /// Build the immutable model catalog.
    ///
    /// # Errors
    /// Returns error if the model list is empty or the default is not in it
    pub fn catalog(&self) -> ConfigResult<ModelCatalog> {
        ModelCatalog::new(self.models.available.iter().cloned(), self.models.default.clone())
            .map_err(|e| ConfigError::validation(e.to_string()))
    }

    /// Whether raw upstream error text may be sent to clients
    #[must_use]
    pub fn expose_error_details(&self) -> bool {
        self.environment.is_development()
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development; error details are exposed
    Development,
    /// Everything else
    #[default]
    Production,
}

impl Environment {
    /// Whether this is the development environment
    #[must_use]
    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

/// Upstream provider settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Gemini API key
    pub api_key: Option<SecretString>,
    /// Gemini REST base URL
    pub base_url: String,
    /// Client-side deadline for a provider call
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl ProviderSettings {
    /// Default Gemini REST endpoint
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";
    /// Default provider deadline
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}

/// Model catalog settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Allowed model identifiers
    pub available: Vec<String>,
    /// Model used when a request names none
    pub default: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            available: DEFAULT_MODELS.iter().map(|m| (*m).to_string()).collect(),
            default: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive (overridden by `RUST_LOG`)
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
