//! Namespaced lookup cache for geocache.
//!
//! Unbounded in-memory store with explicit point and full eviction.

mod cache;

pub use cache::{CacheStats, LookupCache};
