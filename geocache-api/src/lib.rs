//! # geocache API Server
//!
//! HTTP surface over [`GeocodingResolver`](geocache_resolver::GeocodingResolver).
//!
//! ## Endpoints
//!
//! - `GET /geocoding?address=..` - Address to `{latitude, longitude}`
//! - `GET /reverse-geocoding?latitude=..&longitude=..` - Coordinates to address
//! - `DELETE /cache[?key=..]` - Evict one key from both caches, or everything
//! - `GET /health` - Liveness and cache statistics
//!
//! ## Example
//!
//! ```rust,ignore
//! use geocache_api::{ApiServer, ApiConfig};
//!
//! let server = ApiServer::new(ApiConfig::from_env())?;
//! server.run(([0, 0, 0, 0], 8080)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod dto;
mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{ApiConfig, AppState};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use geocache_core::error::Result;

/// API server for geocache.
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Creates a new API server with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self::with_state(Arc::new(AppState::new(config)?)))
    }

    /// Creates a server around prepared state.
    pub fn with_state(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Creates the router with all routes configured.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        create_router(self.state.clone())
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server on the given address.
    pub async fn run(self, addr: impl Into<SocketAddr>) -> std::io::Result<()> {
        let addr = addr.into();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("geocache API server listening on {}", addr);

        axum::serve(listener, self.router()).await
    }
}
