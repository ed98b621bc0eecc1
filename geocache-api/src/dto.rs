//! DTOs for API requests and responses.

use serde::{Deserialize, Serialize};

use geocache_cache::CacheStats;

/// Query for `GET /geocoding`.
#[derive(Debug, Deserialize)]
pub struct ForwardQuery {
    /// Free-form address, used verbatim as the cache key
    pub address: String,
}

/// Query for `GET /reverse-geocoding`.
#[derive(Debug, Deserialize)]
pub struct ReverseQuery {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Query for `DELETE /cache`.
#[derive(Debug, Deserialize)]
pub struct EvictQuery {
    /// Key to evict from both namespaces; everything when absent
    pub key: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status
    pub status: String,
    /// Version
    pub version: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
    /// Forward cache statistics
    pub forward_cache: CacheStats,
    /// Reverse cache statistics
    pub reverse_cache: CacheStats,
}
