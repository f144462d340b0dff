//! Server lifecycle.

use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

use crate::{error::ServerError, routes::create_router, shutdown::shutdown_signal, state::AppState};

/// Listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host or IP to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Listener settings from the gateway configuration
    #[must_use]
    pub fn from_settings(settings: &gateway_config::ServerSettings) -> Self {
        Self {
            host: settings.host.clone(),
            port: settings.port,
        }
    }

    /// Resolve the bind address
    ///
    /// # Errors
    /// Returns error if the host is not an IP address
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let address = format!("{}:{}", self.host, self.port);
        address
            .parse()
            .map_err(|e: std::net::AddrParseError| ServerError::InvalidAddress {
                address: address.clone(),
                message: e.to_string(),
            })
    }
}

/// The gateway HTTP server
#[derive(Debug)]
pub struct Server {
    config: ServerConfig,
    state: AppState,
}

impl Server {
    /// Create a new server
    #[must_use]
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Bind the configured address and serve until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    /// Returns error if the address is invalid, bind fails, or serving fails
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.socket_addr()?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        self.serve(listener, async {
            shutdown_signal().await;
        })
        .await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    ///
    /// # Errors
    /// Returns error if serving fails
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr().map_err(ServerError::Serve)?;
        let router = create_router(self.state);

        info!(address = %local_addr, "Chat gateway listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(ServerError::Serve)?;

        info!("Server stopped");
        Ok(())
    }
}
