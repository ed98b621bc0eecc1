//! Cache namespaces.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{FORWARD_NAMESPACE, REVERSE_NAMESPACE};

/// An isolated cache key space, one per lookup direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CacheNamespace {
    /// Address → coordinate, keyed by the raw address string.
    #[serde(rename = "geocoding")]
    Forward,
    /// Coordinate → address, keyed by [`Coordinate::cache_key`](crate::Coordinate::cache_key).
    #[serde(rename = "reverse-geocoding")]
    Reverse,
}

impl CacheNamespace {
    /// Both namespaces, forward first.
    pub const ALL: [CacheNamespace; 2] = [CacheNamespace::Forward, CacheNamespace::Reverse];

    /// Stable name used in logs and stats.
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheNamespace::Forward => FORWARD_NAMESPACE,
            CacheNamespace::Reverse => REVERSE_NAMESPACE,
        }
    }
}

impl fmt::Display for CacheNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_names() {
        assert_eq!(CacheNamespace::Forward.to_string(), "geocoding");
        assert_eq!(CacheNamespace::Reverse.to_string(), "reverse-geocoding");
        assert_ne!(CacheNamespace::Forward, CacheNamespace::Reverse);
    }

    #[test]
    fn test_serialized_name_matches_display() {
        for namespace in CacheNamespace::ALL {
            let json = serde_json::to_value(namespace).unwrap();
            assert_eq!(json, serde_json::Value::String(namespace.as_str().to_string()));
        }

        let parsed: CacheNamespace = serde_json::from_str("\"reverse-geocoding\"").unwrap();
        assert_eq!(parsed, CacheNamespace::Reverse);
    }
}
