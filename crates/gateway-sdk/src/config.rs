//! Client configuration for the Gateway SDK.

use std::time::Duration;
use url::Url;

/// Configuration for the Gateway SDK client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the gateway server.
    pub(crate) base_url: Url,
    /// Request timeout duration.
    pub(crate) timeout: Duration,
    /// Connection timeout duration.
    pub(crate) connect_timeout: Duration,
    /// User agent string.
    pub(crate) user_agent: String,
}

impl ClientConfig {
    /// Default gateway address.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3000";
    /// Default request timeout (a little over the gateway's own provider deadline).
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(130);
    /// Default connection timeout (10 seconds).
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    /// Default user agent.
    pub const DEFAULT_USER_AGENT: &'static str = concat!(
        "gateway-sdk-rust/",
        env!("CARGO_PKG_VERSION")
    );

    /// Create a new configuration with default values.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Self::DEFAULT_TIMEOUT,
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the connection timeout.
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Get the user agent.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for ClientConfig {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self::new(Url::parse(Self::DEFAULT_BASE_URL).expect("valid default URL"))
    }
}
