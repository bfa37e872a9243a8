//! # HTTP Server
//!
//! Combines the endpoint routers over one storage gateway and runs the
//! serve loop. The backend session handshake happens before the server
//! starts accepting requests; a handshake failure at startup is fatal
//! for the process.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::gateway::{GatewayError, GatewayResult};

use super::config::HttpServerConfig;
use super::log_routes::{log_routes, LogState};
use super::observability_routes::health_routes;

/// HTTP server for the log storage API
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<LogState>,
}

impl HttpServer {
    /// Create a server from a configuration and shared log state.
    pub fn new(config: HttpServerConfig, state: Arc<LogState>) -> Self {
        Self { config, state }
    }

    /// Build the combined router with all endpoints
    pub fn router(&self) -> Router {
        let cors = if self.config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = self
                .config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(log_routes(self.state.clone()))
            .layer(DefaultBodyLimit::max(self.config.max_body_bytes))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Start the HTTP server (async)
    ///
    /// Establishes the backend session first so a misconfigured backend
    /// fails the boot instead of the first request.
    pub async fn start(self) -> GatewayResult<()> {
        self.state.gateway.ensure_session().await?;

        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| GatewayError::Init(format!("invalid socket address: {}", e)))?;

        let router = self.router();
        info!(%addr, "log storage API listening");

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Init(format!("failed to bind {}: {}", addr, e)))?;
        axum::serve(listener, router)
            .await
            .map_err(|e| GatewayError::Backend(format!("server error: {}", e)))?;

        Ok(())
    }
}
