//! In-memory LRU cache for raw API responses.
//!
//! Keyed by request path and scoped to a single process run; there is no file
//! or database persistence. Repeated commands in one invocation (details
//! fetched for names, then again for standings order) hit the cache instead
//! of the network.

use lru::LruCache;
use serde_json::Value;
use std::num::NonZeroUsize;
use std::sync::Mutex;

/// Default number of cached responses; one gameweek's worth of requests is
/// far below this.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

#[derive(Debug)]
pub struct ResponseCache {
    entries: Mutex<LruCache<String, Value>>,
}

impl ResponseCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    pub fn put(&self, key: String, value: Value) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.put(key, value);
        }
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
