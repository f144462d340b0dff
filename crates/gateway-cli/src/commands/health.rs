//! Health check command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::time::{Duration, Instant};

use crate::output::{self, CommandResult, OutputFormat};

/// Arguments for the health command.
#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Timeout in seconds
    #[arg(short, long, default_value = "5")]
    pub timeout: u64,
}

/// Health check response for output.
#[derive(Debug, Serialize)]
pub struct HealthOutput {
    pub status: String,
    pub response_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_seconds: Option<u64>,
}

/// Execute the health command.
pub async fn execute(args: HealthArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);

    let client = gateway_sdk::Client::builder()
        .base_url(base_url)
        .timeout(Duration::from_secs(args.timeout))
        .build()?;

    let spinner = (format == OutputFormat::Text).then(|| output::spinner("Checking gateway health..."));

    let start = Instant::now();
    let result = client.health().await;
    let elapsed = start.elapsed();

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match (result, format) {
        (Ok(health), OutputFormat::Json) => output::json(&CommandResult::success(HealthOutput {
            status: health.status,
            response_time_ms: elapsed.as_millis() as u64,
            version: health.version,
            uptime_seconds: health.uptime_seconds,
        })),
        (Ok(health), OutputFormat::Text) => {
            if health.is_healthy() {
                output::success("Gateway is healthy");
            } else {
                output::warning(&format!("Gateway reports status '{}'", health.status));
            }
            output::key_value("URL", base_url);
            output::key_value("Response Time", &format!("{}ms", elapsed.as_millis()));
            if let Some(version) = &health.version {
                output::key_value("Version", version);
            }
            if let Some(uptime) = health.uptime_seconds {
                output::key_value("Uptime", &format!("{uptime}s"));
            }
            Ok(())
        }
        (Err(e), OutputFormat::Json) => output::json(&CommandResult::<HealthOutput>::failure(e.to_string())),
        (Err(e), OutputFormat::Text) => {
            if e.is_unreachable() {
                output::error(&format!("Gateway is not reachable: {e}"));
                output::key_value("URL", base_url);
            } else {
                output::error(&format!("Health check failed: {e}"));
            }
            Ok(())
        }
    }
}
