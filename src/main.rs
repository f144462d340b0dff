//! # Chat Gateway
//!
//! A minimal relay between chat clients and Google Gemini.
//!
//! ## Features
//!
//! - `POST /api/chat` with a uniform success/failure envelope
//! - Local validation against a fixed model catalog
//! - Classification of upstream failures into a closed error taxonomy
//!
//! ## Usage
//!
//! ```bash
//! # Start with default configuration
//! GEMINI_API_KEY=... chat-gateway-server
//!
//! # Start with a config file
//! GATEWAY_CONFIG=/path/to/gateway.toml chat-gateway-server
//!
//! # Start with environment overrides
//! PORT=9000 GATEWAY_ENV=development chat-gateway-server
//! ```

use anyhow::Context;
use gateway_config::load_config;
use gateway_server::{AppState, Server, ServerConfig};
use gateway_telemetry::{init_logging, LoggingConfig};
use tracing::{error, info};

/// Application entry point
#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    if let Err(e) = run().await {
        error!(error = %format!("{e:#}"), "Application failed");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Main application logic
async fn run() -> anyhow::Result<()> {
    // Logging comes from the configuration, so load it before anything logs
    let config = load_config().await.context("Failed to load configuration")?;

    let logging = LoggingConfig::new()
        .with_level(config.logging.level.clone())
        .with_json(config.logging.json);
    if let Err(e) = init_logging(&logging) {
        eprintln!("Failed to initialize logging: {e}");
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "Starting Chat Gateway"
    );

    let state = AppState::from_config(&config).context("Failed to build application state")?;

    info!(
        provider = state.provider.id(),
        models = state.catalog.len(),
        default_model = state.catalog.default_model(),
        "Provider initialized"
    );

    let server = Server::new(ServerConfig::from_settings(&config.server), state);
    server.run().await?;

    Ok(())
}
