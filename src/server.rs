//! HTTP server initialization and runtime setup.
//!
//! Handles state construction, the eviction worker and the Axum server lifecycle.

use crate::application::eviction_worker::run_eviction_worker;
use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Authentication and rate limiting services
/// - Background eviction of idle rate limit records
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The configuration fails [`Config::validate`]
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    config.validate()?;

    let state = AppState::from_config(&config);

    let eviction = tokio::spawn(run_eviction_worker(
        state.rate_limiter.clone(),
        config.eviction_interval(),
    ));
    tracing::info!("Eviction worker started");

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server starting on {addr}...");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    eviction.abort();
    tracing::info!("Server stopped");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_rejects_zero_eviction_interval() {
        let config = Config {
            listen_addr: "127.0.0.1:0".to_string(),
            rate_limit_eviction_interval_secs: 0,
            ..Config::default()
        };

        let err = run(config).await.unwrap_err();
        assert!(err.to_string().contains("RATE_LIMIT_EVICTION_INTERVAL_SECS"));
    }
}
