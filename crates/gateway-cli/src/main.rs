//! Chat Gateway CLI
//!
//! Command-line interface for running and talking to the Chat Gateway.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // The server sets up logging from its own configuration
    if !matches!(cli.command, Commands::Start(_)) {
        init_tracing(cli.verbose, cli.json);
    }

    // Execute command
    cli.execute().await
}

/// Initialize tracing/logging based on verbosity and format.
fn init_tracing(verbose: u8, json: bool) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let config = gateway_telemetry::LoggingConfig::new()
        .with_level(level)
        .with_json(json)
        .with_target(verbose > 1);

    // a subscriber may already be installed by a test harness
    let _ = gateway_telemetry::init_logging(&config);
}
