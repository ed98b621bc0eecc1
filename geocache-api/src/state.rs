//! App state: config and the resolver.

use std::sync::Arc;
use std::time::Instant;

use geocache_core::constants::{
    DEFAULT_FORWARD_URL, DEFAULT_PROVIDER_TIMEOUT_SECONDS, DEFAULT_REVERSE_URL,
};
use geocache_core::error::Result;
use geocache_core::traits::GeocodingProvider;
use geocache_resolver::{GeocodingResolver, ProviderConfig};

/// Server configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Forward geocoding endpoint
    pub forward_url: String,
    /// Reverse geocoding endpoint
    pub reverse_url: String,
    /// Provider credential
    pub access_key: String,
    /// Provider request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            forward_url: DEFAULT_FORWARD_URL.into(),
            reverse_url: DEFAULT_REVERSE_URL.into(),
            access_key: String::new(),
            timeout_seconds: DEFAULT_PROVIDER_TIMEOUT_SECONDS,
        }
    }
}

impl ApiConfig {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            forward_url: std::env::var("GEOCODING_URL")
                .unwrap_or_else(|_| DEFAULT_FORWARD_URL.into()),
            reverse_url: std::env::var("REVERSE_GEOCODING_URL")
                .unwrap_or_else(|_| DEFAULT_REVERSE_URL.into()),
            access_key: std::env::var("GEOCODING_API_KEY").unwrap_or_default(),
            timeout_seconds: std::env::var("PROVIDER_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECONDS),
        }
    }

    /// Provider client settings derived from this config.
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig::new(self.access_key.clone())
            .with_urls(self.forward_url.clone(), self.reverse_url.clone())
            .with_timeout(self.timeout_seconds)
    }
}

/// Shared handler state.
pub struct AppState {
    /// Startup configuration
    pub config: ApiConfig,
    /// Cache-first resolver
    pub resolver: GeocodingResolver,
    /// When the state was built
    pub started_at: Instant,
}

impl AppState {
    /// Builds state with the HTTP provider client.
    pub fn new(config: ApiConfig) -> Result<Self> {
        if config.access_key.is_empty() {
            tracing::warn!("No provider access key configured");
        }

        let resolver = GeocodingResolver::with_config(config.provider_config())?;
        Ok(Self {
            config,
            resolver,
            started_at: Instant::now(),
        })
    }

    /// Builds state around any provider.
    pub fn with_provider(config: ApiConfig, provider: Arc<dyn GeocodingProvider>) -> Self {
        Self {
            config,
            resolver: GeocodingResolver::new(provider),
            started_at: Instant::now(),
        }
    }
}
