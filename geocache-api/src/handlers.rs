//! API route handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;

use geocache_core::types::Coordinate;

use crate::dto::*;
use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

/// Confirmation body for `DELETE /cache`.
pub const EVICTED_MESSAGE: &str = "Cache evicted";

/// GET /geocoding
pub async fn forward_geocoding(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ForwardQuery>,
) -> Result<Json<Coordinate>> {
    let coordinate = state.resolver.resolve_forward(&query.address).await?;
    Ok(Json(coordinate))
}

/// GET /reverse-geocoding
pub async fn reverse_geocoding(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReverseQuery>,
) -> Result<String> {
    let address = state
        .resolver
        .resolve_reverse(query.latitude, query.longitude)
        .await?;
    Ok(address)
}

/// DELETE /cache
pub async fn evict_cache(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EvictQuery>,
) -> &'static str {
    state.resolver.evict_cache(query.key.as_deref());
    info!(key = ?query.key, "Cache eviction requested");
    EVICTED_MESSAGE
}

/// GET /health
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Json<HealthResponse> {
    let stats = state.resolver.cache_stats();

    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        forward_cache: stats.forward,
        reverse_cache: stats.reverse,
    })
}
