//! HTTP client for the external geocoding provider.
//!
//! Speaks the positionstack-style protocol: `GET {endpoint}?access_key=..&query=..`
//! answering with `{"data": [...]}`.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use geocache_core::constants::{
    ACCESS_KEY_PARAM, DEFAULT_FORWARD_URL, DEFAULT_PROVIDER_TIMEOUT_SECONDS, DEFAULT_REVERSE_URL,
    QUERY_PARAM,
};
use geocache_core::error::{GeocodingError, Result};
use geocache_core::traits::GeocodingProvider;
use geocache_core::types::{Coordinate, ForwardResponse, ReverseResponse};

/// Provider client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Forward geocoding endpoint
    pub forward_url: String,
    /// Reverse geocoding endpoint
    pub reverse_url: String,
    /// Credential sent as the `access_key` query parameter
    pub access_key: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            forward_url: DEFAULT_FORWARD_URL.into(),
            reverse_url: DEFAULT_REVERSE_URL.into(),
            access_key: String::new(),
            timeout_seconds: DEFAULT_PROVIDER_TIMEOUT_SECONDS,
        }
    }
}

impl ProviderConfig {
    /// Creates a config for the default endpoints with the given credential.
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            ..Default::default()
        }
    }

    /// Points the client at different endpoints.
    pub fn with_urls(mut self, forward_url: impl Into<String>, reverse_url: impl Into<String>) -> Self {
        self.forward_url = forward_url.into();
        self.reverse_url = reverse_url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }
}

/// reqwest-backed [`GeocodingProvider`].
pub struct ProviderClient {
    config: ProviderConfig,
    http_client: reqwest::Client,
}

impl ProviderClient {
    /// Creates a new client with custom configuration.
    pub fn with_config(config: ProviderConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| GeocodingError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Issues one GET and decodes the body, if any.
    async fn fetch<T: DeserializeOwned>(&self, url: &str, query: &str) -> Result<Option<T>> {
        let response = self
            .http_client
            .get(url)
            .query(&[(ACCESS_KEY_PARAM, self.config.access_key.as_str()), (QUERY_PARAM, query)])
            .send()
            .await
            .map_err(|e| GeocodingError::Http(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GeocodingError::Http(e.to_string()))?;

        if !status.is_success() {
            warn!(url, status = status.as_u16(), "Provider request failed");
            return Err(GeocodingError::ProviderStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            debug!(url, "Provider returned an empty body");
            return Ok(None);
        }

        // A literal `null` body decodes to None as well.
        Ok(serde_json::from_str::<Option<T>>(&text)?)
    }
}

#[async_trait]
impl GeocodingProvider for ProviderClient {
    #[instrument(skip(self))]
    async fn forward_lookup(&self, address: &str) -> Result<Option<ForwardResponse>> {
        self.fetch(&self.config.forward_url, address).await
    }

    #[instrument(skip(self))]
    async fn reverse_lookup(&self, latitude: f64, longitude: f64) -> Result<Option<ReverseResponse>> {
        let query = Coordinate::new(latitude, longitude).to_query();
        self.fetch(&self.config.reverse_url, &query).await
    }
}
