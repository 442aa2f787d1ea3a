//! Axum server setup
//!
//! Server skeleton with:
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::Storage;

/// Default listening port
pub const DEFAULT_PORT: u16 = 8888;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8888)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        }
    }
}

/// Shared application state
pub struct AppState {
    pub storage: Storage,
}

/// Build the application router with all routes.
pub fn build_router(storage: Storage) -> Router {
    let state = AppState { storage };

    Router::new()
        .merge(routes::health::router())
        .merge(routes::users::router())
        .merge(routes::songs::router())
        .merge(routes::assignments::router())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// The storage connection must already be open; the caller closes it
/// once this returns.
///
/// # Example
///
/// ```ignore
/// let storage = Storage::connect(&StorageConfig::new(database_url)).await?;
/// run_server(storage.clone(), ServerConfig::default()).await?;
/// storage.close().await;
/// ```
pub async fn run_server(storage: Storage, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(storage);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_addr,
            source,
        })?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Failure to start or keep serving HTTP
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listen address is taken, not local or not permitted
    #[error("cannot listen on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}
