//! In-memory lookup cache, one instance per namespace.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use serde::Serialize;

use geocache_core::types::CacheNamespace;

/// Thread-safe key-value store for resolved lookups.
///
/// Keys are compared verbatim. Entries live until evicted or cleared; there
/// is no TTL and no capacity bound. Each single-key operation holds the lock
/// for its whole duration, so no reader ever sees a half-written entry.
pub struct LookupCache<V> {
    namespace: CacheNamespace,
    entries: RwLock<HashMap<String, V>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<V: Clone> LookupCache<V> {
    /// Creates an empty cache for the given namespace.
    pub fn new(namespace: CacheNamespace) -> Self {
        Self {
            namespace,
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Namespace this cache serves.
    pub fn namespace(&self) -> CacheNamespace {
        self.namespace
    }

    /// Gets a cached value by exact key.
    pub fn get(&self, key: &str) -> Option<V> {
        let value = self.entries.read().get(key).cloned();
        let counter = if value.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        value
    }

    /// Stores a value, replacing any previous one under the same key.
    pub fn put(&self, key: impl Into<String>, value: V) {
        self.entries.write().insert(key.into(), value);
    }

    /// Removes a cached entry. Returns whether one was present.
    pub fn evict(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }

    /// Clears all cached entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            namespace: self.namespace,
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

/// Cache statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Namespace the numbers belong to
    pub namespace: CacheNamespace,
    /// Entries currently stored
    pub entries: usize,
    /// `get` calls that found a value
    pub hits: u64,
    /// `get` calls that found nothing
    pub misses: u64,
}
