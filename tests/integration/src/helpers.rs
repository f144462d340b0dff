//! Test helper utilities for integration tests

use gateway_config::GatewayConfig;
use gateway_server::{AppState, Server, ServerConfig};
use once_cell::sync::Lazy;
use reqwest::Response;
use serde_json::Value;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::mock_providers::{MockGemini, TEST_API_KEY};

/// Initialize tracing for tests (only once)
static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
});

/// Initialize tracing for tests
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Options for a test gateway
#[derive(Debug, Clone)]
pub struct GatewayOptions {
    /// Run in development mode (error details exposed)
    pub development: bool,
    /// Send an API key upstream
    pub with_api_key: bool,
    /// Upstream request timeout
    pub provider_timeout: Duration,
}

impl Default for GatewayOptions {
    fn default() -> Self {
        Self {
            development: false,
            with_api_key: true,
            provider_timeout: Duration::from_secs(10),
        }
    }
}

/// A running gateway pointed at a mock Gemini
pub struct TestGateway {
    /// The server address
    pub addr: SocketAddr,
    /// Raw HTTP client for contract checks
    pub http: reqwest::Client,
    /// SDK client bound to this gateway
    pub sdk: gateway_sdk::Client,
    /// Base URL for the server
    pub base_url: String,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestGateway {
    /// Start a production-mode gateway in front of `upstream`
    pub async fn start(upstream: &MockGemini) -> Self {
        Self::start_with(upstream, GatewayOptions::default()).await
    }

    /// Start a gateway with custom options
    pub async fn start_with(upstream: &MockGemini, options: GatewayOptions) -> Self {
        init_tracing();

        let config = gateway_config(upstream, &options);
        let state = AppState::from_config(&config).expect("valid state");
        let server = Server::new(ServerConfig::from_settings(&config.server), state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get local addr");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            server
                .serve(listener, async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("Server error");
        });

        let base_url = format!("http://{}", addr);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create client");

        let sdk = gateway_sdk::Client::builder()
            .base_url(&base_url)
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create SDK client");

        Self {
            addr,
            http,
            sdk,
            base_url,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Get the full URL for a path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body to `/api/chat`
    pub async fn post_chat(&self, body: &Value) -> Response {
        self.http
            .post(self.url("/api/chat"))
            .json(body)
            .send()
            .await
            .expect("Request failed")
    }

    /// POST a raw body to `/api/chat`
    pub async fn post_chat_raw(&self, body: &'static str) -> Response {
        self.http
            .post(self.url("/api/chat"))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Request failed")
    }

    /// GET a path
    pub async fn get(&self, path: &str) -> Response {
        self.http
            .get(self.url(path))
            .send()
            .await
            .expect("Request failed")
    }
}

impl Drop for TestGateway {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Build a gateway configuration through the environment layer
fn gateway_config(upstream: &MockGemini, options: &GatewayOptions) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    let base_url = upstream.url();
    let environment = if options.development {
        "development"
    } else {
        "production"
    };

    config
        .apply_env(|key| match key {
            "GEMINI_API_KEY" if options.with_api_key => Some(TEST_API_KEY.to_string()),
            "GEMINI_BASE_URL" => Some(base_url.clone()),
            "GATEWAY_ENV" => Some(environment.to_string()),
            "GATEWAY_HOST" => Some("127.0.0.1".to_string()),
            _ => None,
        })
        .expect("valid environment");
    config.provider.timeout = options.provider_timeout;
    config.validate().expect("valid config");

    config
}

/// Read a response as status plus JSON body
pub async fn status_and_json(response: Response) -> (u16, Value) {
    let status = response.status().as_u16();
    let body = response.json().await.expect("JSON body");
    (status, body)
}
