//! Common traits for geocache.
//!
//! The provider trait is the seam between the resolver and the outside world,
//! so tests can substitute a stub for the HTTP client.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ForwardResponse, ReverseResponse};

// ═══════════════════════════════════════════════════════════════════════════════
// GEOCODING PROVIDER TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface for an external geocoding service.
///
/// Implementations return `Ok(None)` when the service answered without a body.
/// Timeouts and retries, if any, are the implementation's business.
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Looks up coordinates for a free-form address.
    async fn forward_lookup(&self, address: &str) -> Result<Option<ForwardResponse>>;

    /// Looks up an address label for a coordinate pair.
    async fn reverse_lookup(&self, latitude: f64, longitude: f64) -> Result<Option<ReverseResponse>>;
}
