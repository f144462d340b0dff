//! HTTP client for the Gateway SDK.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::response::{ChatOutcome, Envelope, FailureReply, HealthResponse};
use gateway_core::ChatRequest;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// Client for the Chat Gateway.
///
/// # Example
///
/// ```rust,no_run
/// use gateway_sdk::{format_error_message, ChatOutcome, Client};
///
/// #[tokio::main]
/// async fn main() -> Result<(), gateway_sdk::Error> {
///     let client = Client::builder()
///         .base_url("http://localhost:3000")
///         .build()?;
///
///     match client.send_message("Hello!", None).await {
///         ChatOutcome::Success { reply } => println!("{reply}"),
///         ChatOutcome::Failure(f) => {
///             eprintln!("{}", format_error_message(&f.error_code, &f.error, f.status));
///         }
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    /// HTTP client.
    http: reqwest::Client,
    /// Client configuration.
    config: Arc<ClientConfig>,
}

impl Client {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| Error::configuration(format!("Invalid user agent: {}", e)))?,
        );

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one chat message.
    ///
    /// Never fails: an unreachable gateway or an unreadable answer is
    /// reported as a `NETWORK_ERROR` failure.
    #[instrument(skip(self, message), fields(model = ?model))]
    pub async fn send_message(&self, message: &str, model: Option<&str>) -> ChatOutcome {
        let mut request = ChatRequest::new(message);
        request.model = model.map(String::from);

        let url = match self.url("/api/chat") {
            Ok(url) => url,
            Err(e) => return ChatOutcome::Failure(FailureReply::network(e.to_string())),
        };

        debug!("Sending chat request to {}", url);

        let response = match self.http.post(url).json(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                let error = self.map_reqwest_error(e);
                warn!(error = %error, "Gateway unreachable");
                return ChatOutcome::Failure(FailureReply::network(error.to_string()));
            }
        };

        let status = response.status().as_u16();

        let envelope = match response.json::<Envelope>().await {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(status = status, error = %e, "Gateway answered with an unreadable body");
                return ChatOutcome::Failure(FailureReply::network(format!(
                    "Unexpected response from gateway (HTTP {})",
                    status
                )));
            }
        };

        ChatOutcome::from_envelope(envelope, status).unwrap_or_else(|| {
            warn!(status = status, "Gateway answered with an incomplete envelope");
            ChatOutcome::Failure(FailureReply::network(format!(
                "Unexpected response from gateway (HTTP {})",
                status
            )))
        })
    }

    /// Check the health of the gateway.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = self.url("/api/health")?;

        debug!("Checking health at {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: if body.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body
                },
            });
        }

        response
            .json()
            .await
            .map_err(|e| Error::parse_error(format!("Failed to parse response: {}", e)))
    }

    /// Check if the gateway is healthy.
    pub async fn is_healthy(&self) -> bool {
        self.health().await.map(|h| h.is_healthy()).unwrap_or(false)
    }

    /// Build a URL for the given path.
    fn url(&self, path: &str) -> Result<Url> {
        self.config
            .base_url
            .join(path)
            .map_err(|e| Error::configuration(format!("Invalid URL path '{}': {}", path, e)))
    }

    /// Map a reqwest error to an SDK error.
    fn map_reqwest_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::Timeout {
                duration_ms: self.config.timeout.as_millis() as u64,
            }
        } else if error.is_connect() {
            Error::Connection {
                message: error.to_string(),
            }
        } else {
            Error::Http(error)
        }
    }
}

/// Builder for creating a Client.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new client builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gateway base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        let mut config = match self.base_url {
            Some(url) => ClientConfig::new(
                Url::parse(&url)
                    .map_err(|e| Error::configuration(format!("Invalid base URL '{}': {}", url, e)))?,
            ),
            None => ClientConfig::default(),
        };

        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(timeout) = self.connect_timeout {
            config.connect_timeout = timeout;
        }
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }

        Client::new(config)
    }
}
