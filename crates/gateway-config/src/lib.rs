//! # Gateway Config
//!
//! Configuration management for the Chat Gateway.
//!
//! Configuration is layered: built-in defaults, then an optional TOML or YAML
//! file, then environment variables.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod loader;

pub use config::{
    Environment, GatewayConfig, LoggingSettings, ModelSettings, ProviderSettings, ServerSettings,
};
pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, ConfigLoader};
