//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::io;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::article_routes::article_routes;
use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::validate_routes::validate_routes;
use crate::catalog::Catalog;

/// HTTP server for the shop floor API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over an existing catalog
    pub fn new(config: HttpServerConfig, catalog: Arc<Catalog>) -> Self {
        let router = Self::build_router(&config, catalog);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, catalog: Arc<Catalog>) -> Router {
        Router::new()
            .merge(health_routes())
            .nest("/api", article_routes(catalog).merge(validate_routes()))
            .layer(TraceLayer::new_for_http())
            .layer(config.cors_layer())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until ctrl-c
    pub async fn start(self) -> io::Result<()> {
        let addr = self
            .config
            .parse_addr()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "HTTP server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
