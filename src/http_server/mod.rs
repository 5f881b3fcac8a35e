//! # HTTP Server Module
//!
//! JSON API over the article catalog, combined into one Axum router.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/articles` - Article definitions
//! - `/api/articles/:id/entries` - Shop floor entries, validated on create
//! - `/api/validate` - Dry-run validation against an inline schema

pub mod article_routes;
pub mod config;
pub mod errors;
pub mod health_routes;
pub mod response;
pub mod server;
pub mod validate_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
