//! Shutdown signal handling.

use tokio::signal;
use tracing::info;

/// Wait for Ctrl+C or SIGTERM.
///
/// Returns the name of the signal that fired.
#[allow(clippy::expect_used)]
pub async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
        "ctrl+c"
    };

    #[cfg(unix)]
    let sigterm = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
        "sigterm"
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<&'static str>();

    let signal_name = tokio::select! {
        name = ctrl_c => name,
        name = sigterm => name,
    };

    info!(signal = signal_name, "Received shutdown signal");
    signal_name
}
