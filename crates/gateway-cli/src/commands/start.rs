//! Start command - launches the gateway server.

use anyhow::{Context, Result};
use clap::Args;
use gateway_config::{ConfigLoader, Environment, GatewayConfig};
use gateway_server::{AppState, Server, ServerConfig};
use gateway_telemetry::LoggingConfig;
use std::path::PathBuf;

use crate::output;

/// Arguments for the start command.
#[derive(Args, Debug)]
pub struct StartArgs {
    /// Configuration file path (TOML or YAML)
    #[arg(short, long, env = "GATEWAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Run in development mode (error details are sent to clients)
    #[arg(long)]
    pub dev: bool,
}

/// Execute the start command.
pub async fn execute(args: StartArgs) -> Result<()> {
    let config = load_config(&args).await?;

    let logging = LoggingConfig::new()
        .with_level(config.logging.level.clone())
        .with_json(config.logging.json);
    gateway_telemetry::init_logging(&logging).context("Failed to initialize logging")?;

    output::info(&format!(
        "Starting Chat Gateway on {}:{}",
        config.server.host, config.server.port
    ));

    if config.environment.is_development() {
        output::warning("Development mode enabled - error details are returned to clients");
    }

    if config.provider.api_key.is_none() {
        output::warning("GEMINI_API_KEY is not set - chat requests will fail");
    }

    let state = AppState::from_config(&config).context("Failed to build application state")?;
    let server = Server::new(ServerConfig::from_settings(&config.server), state);

    output::info("Press Ctrl+C to stop");
    server.run().await.context("Server error")?;

    output::info("Server stopped");
    Ok(())
}

/// Load configuration and apply command-line overrides.
async fn load_config(args: &StartArgs) -> Result<GatewayConfig> {
    let loader = match &args.config {
        Some(path) => ConfigLoader::new().with_file(path),
        None => ConfigLoader::new(),
    };

    let mut config = loader.load().await.context("Failed to load configuration")?;
    apply_overrides(&mut config, args);
    config.validate().context("Invalid configuration")?;

    Ok(config)
}

fn apply_overrides(config: &mut GatewayConfig, args: &StartArgs) {
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.dev {
        config.environment = Environment::Development;
    }
}
