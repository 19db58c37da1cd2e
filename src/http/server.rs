//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the relay handler on every path and method
//! - Wire up middleware (tracing)
//! - Serve on a bound listener until shutdown is signalled

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::RelayConfig;
use crate::http::relay::{relay_handler, RelayState};
use crate::observability::http_trace::http_trace_layer;

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        let state = RelayState::from_config(&config)?;
        Ok(Self::with_state(config, state))
    }

    /// Create a server around a prepared relay state (custom client or allow-list).
    pub fn with_state(config: RelayConfig, state: RelayState) -> Self {
        Self {
            router: build_router(state),
            config,
        }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            allowed_origins = ?self.config.cors.allowed_origins,
            upstream_timeout_secs = self.config.timeouts.upstream_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(state: RelayState) -> Router {
    Router::new()
        .route("/", any(relay_handler))
        .route("/{*path}", any(relay_handler))
        .with_state(state)
        .layer(http_trace_layer())
}
