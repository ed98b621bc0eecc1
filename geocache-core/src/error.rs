//! Error types for geocache.

use thiserror::Error;

/// Result type alias using `GeocodingError`.
pub type Result<T> = std::result::Result<T, GeocodingError>;

/// Main error type for all geocache operations.
#[derive(Debug, Error)]
pub enum GeocodingError {
    // ═══════════════════════════════════════════════════════════════════════════
    // LOOKUP ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The provider returned no usable body.
    #[error("No data received for {0}")]
    NoData(String),

    /// The provider answered, but with nothing for these inputs.
    #[error("Invalid input or no data found: {0}")]
    InvalidInput(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // PROVIDER ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The provider responded with a non-success status.
    #[error("Provider returned status {status}: {body}")]
    ProviderStatus {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Provider body could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl GeocodingError {
    /// Returns true if retrying the same request might succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            GeocodingError::Http(_) => true,
            GeocodingError::ProviderStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
