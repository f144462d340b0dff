//! Layered configuration loading.

use crate::config::GatewayConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Builds a [`GatewayConfig`] from defaults, an optional file and the environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    use_env: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader that reads the environment but no file
    #[must_use]
    pub fn new() -> Self {
        Self {
            file: None,
            use_env: true,
        }
    }

    /// Read a TOML or YAML file before applying the environment
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Enable or disable environment overrides
    #[must_use]
    pub fn with_env(mut self, enabled: bool) -> Self {
        self.use_env = enabled;
        self
    }

    /// Load, merge and validate the configuration.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed, or validation fails
    pub async fn load(&self) -> ConfigResult<GatewayConfig> {
        let mut config = match &self.file {
            Some(path) => {
                debug!(path = %path.display(), "Reading configuration file");
                let contents = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| ConfigError::Io {
                        path: path.clone(),
                        source,
                    })?;
                parse_config(path, &contents)?
            }
            None => GatewayConfig::default(),
        };

        if self.use_env {
            config.apply_env(|key| std::env::var(key).ok())?;
        }

        config.validate()?;

        if config.provider.api_key.is_none() {
            warn!("GEMINI_API_KEY not set, chat requests will fail until it is configured");
        }

        info!(
            host = %config.server.host,
            port = config.server.port,
            environment = %config.environment,
            models = config.models.available.len(),
            "Configuration loaded"
        );

        Ok(config)
    }
}

/// Parse file contents, picking the format from the extension
fn parse_config(path: &Path, contents: &str) -> ConfigResult<GatewayConfig> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let parse_err = |message: String| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    };

    match extension.as_deref() {
        Some("toml") => toml::from_str(contents).map_err(|e| parse_err(e.to_string())),
        Some("yaml" | "yml") => serde_yaml::from_str(contents).map_err(|e| parse_err(e.to_string())),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Load configuration from `GATEWAY_CONFIG` (if set) and the environment.
///
/// # Errors
/// Returns error if loading fails
pub async fn load_config() -> ConfigResult<GatewayConfig> {
    let loader = match std::env::var("GATEWAY_CONFIG") {
        Ok(path) if !path.is_empty() => ConfigLoader::new().with_file(path),
        _ => ConfigLoader::new(),
    };
    loader.load().await
}
