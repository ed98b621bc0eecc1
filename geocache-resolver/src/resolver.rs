//! Cache-first geocoding resolver.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument};

use geocache_cache::{CacheStats, LookupCache};
use geocache_core::constants::BYPASS_ADDRESS;
use geocache_core::error::{GeocodingError, Result};
use geocache_core::traits::GeocodingProvider;
use geocache_core::types::{CacheNamespace, Coordinate};

use crate::client::{ProviderClient, ProviderConfig};

/// Returns true for addresses that must never touch the forward cache.
pub fn is_bypassed(address: &str) -> bool {
    address.eq_ignore_ascii_case(BYPASS_ADDRESS)
}

/// Resolves addresses and coordinates, consulting the caches first.
///
/// A lookup:
/// 1. Checks the namespace cache (skipped for the bypass address)
/// 2. On miss, asks the provider and takes its first match
/// 3. Stores the result unless the lookup failed or was bypassed
///
/// Failures are never cached and never retried.
pub struct GeocodingResolver {
    provider: Arc<dyn GeocodingProvider>,
    forward_cache: Arc<LookupCache<Coordinate>>,
    reverse_cache: Arc<LookupCache<String>>,
}

impl GeocodingResolver {
    /// Creates a resolver with fresh, empty caches.
    pub fn new(provider: Arc<dyn GeocodingProvider>) -> Self {
        Self::with_caches(
            provider,
            Arc::new(LookupCache::new(CacheNamespace::Forward)),
            Arc::new(LookupCache::new(CacheNamespace::Reverse)),
        )
    }

    /// Creates a resolver over caches owned elsewhere.
    pub fn with_caches(
        provider: Arc<dyn GeocodingProvider>,
        forward_cache: Arc<LookupCache<Coordinate>>,
        reverse_cache: Arc<LookupCache<String>>,
    ) -> Self {
        Self {
            provider,
            forward_cache,
            reverse_cache,
        }
    }

    /// Creates a resolver backed by the HTTP provider client.
    pub fn with_config(config: ProviderConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(ProviderClient::with_config(config)?)))
    }

    /// Resolves an address to a coordinate.
    ///
    /// The cache key is the address exactly as given.
    #[instrument(skip(self))]
    pub async fn resolve_forward(&self, address: &str) -> Result<Coordinate> {
        let bypass = is_bypassed(address);

        if bypass {
            debug!(address, "Bypassing forward cache");
        } else if let Some(coordinate) = self.forward_cache.get(address) {
            debug!(address, "Cache hit");
            return Ok(coordinate);
        } else {
            debug!(address, "Cache miss, querying provider");
        }

        let response = self
            .provider
            .forward_lookup(address)
            .await?
            .ok_or_else(|| GeocodingError::NoData(format!("address: {}", address)))?;

        let coordinate = response
            .first()
            .map(|m| m.coordinate())
            .ok_or_else(|| GeocodingError::NoData(format!("address: {}", address)))?;

        if !bypass {
            self.forward_cache.put(address, coordinate);
            info!(address, %coordinate, "Cached coordinates");
        }

        Ok(coordinate)
    }

    /// Resolves a coordinate to an address label.
    #[instrument(skip(self))]
    pub async fn resolve_reverse(&self, latitude: f64, longitude: f64) -> Result<String> {
        let key = Coordinate::new(latitude, longitude).cache_key();

        if let Some(address) = self.reverse_cache.get(&key) {
            debug!(key = %key, "Cache hit");
            return Ok(address);
        }

        debug!(key = %key, "Cache miss, querying provider");

        let response = self
            .provider
            .reverse_lookup(latitude, longitude)
            .await?
            .ok_or_else(|| {
                GeocodingError::NoData(format!("coordinates: {}, {}", latitude, longitude))
            })?;

        let address = response
            .first()
            .and_then(|m| m.label.clone())
            .ok_or_else(|| {
                GeocodingError::InvalidInput(format!("coordinates: {}, {}", latitude, longitude))
            })?;

        self.reverse_cache.put(key.clone(), address.clone());
        info!(key = %key, address = %address, "Cached address");

        Ok(address)
    }

    /// Evicts `key` from both namespaces, or clears both when `key` is `None`.
    ///
    /// The same literal key is tried against each namespace; a key that only
    /// means something to one of them is a no-op in the other.
    #[instrument(skip(self))]
    pub fn evict_cache(&self, key: Option<&str>) {
        match key {
            None => {
                self.forward_cache.clear();
                self.reverse_cache.clear();
                info!("Evicted all cache entries");
            }
            Some(key) => {
                self.forward_cache.evict(key);
                self.reverse_cache.evict(key);
                info!(key, "Evicted cache entry");
            }
        }
    }

    /// Forward (address → coordinate) cache.
    pub fn forward_cache(&self) -> &LookupCache<Coordinate> {
        &self.forward_cache
    }

    /// Reverse (coordinate → address) cache.
    pub fn reverse_cache(&self) -> &LookupCache<String> {
        &self.reverse_cache
    }

    /// Statistics for both namespaces.
    pub fn cache_stats(&self) -> ResolverStats {
        ResolverStats {
            forward: self.forward_cache.stats(),
            reverse: self.reverse_cache.stats(),
        }
    }
}

/// Cache statistics for both namespaces.
#[derive(Clone, Debug, Serialize)]
pub struct ResolverStats {
    /// Forward namespace
    pub forward: CacheStats,
    /// Reverse namespace
    pub reverse: CacheStats,
}
