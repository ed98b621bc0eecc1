//! Constants for geocache.

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE
// ═══════════════════════════════════════════════════════════════════════════════

/// Address that is never served from, or written to, the forward cache.
/// Compared ASCII case-insensitively.
pub const BYPASS_ADDRESS: &str = "goa";

/// Name of the forward (address → coordinate) namespace.
pub const FORWARD_NAMESPACE: &str = "geocoding";

/// Name of the reverse (coordinate → address) namespace.
pub const REVERSE_NAMESPACE: &str = "reverse-geocoding";

// ═══════════════════════════════════════════════════════════════════════════════
// PROVIDER
// ═══════════════════════════════════════════════════════════════════════════════

/// Default forward geocoding endpoint.
pub const DEFAULT_FORWARD_URL: &str = "http://api.positionstack.com/v1/forward";

/// Default reverse geocoding endpoint.
pub const DEFAULT_REVERSE_URL: &str = "http://api.positionstack.com/v1/reverse";

/// Default provider request timeout in seconds.
pub const DEFAULT_PROVIDER_TIMEOUT_SECONDS: u64 = 30;

/// Query parameter carrying the provider credential.
pub const ACCESS_KEY_PARAM: &str = "access_key";

/// Query parameter carrying the address or coordinate pair.
pub const QUERY_PARAM: &str = "query";

/// Fixed number of decimals used when sending coordinates to the provider.
pub const WIRE_COORDINATE_PRECISION: usize = 6;
