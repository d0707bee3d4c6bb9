//! Explicit query cache.
//!
//! Fetched results are cached under a string query identity and served until
//! a command invalidates them. There is no TTL and no staleness tracking
//! beyond invalidate-and-refetch: a stale entry behaves exactly like a miss.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

struct CachedQuery {
    payload: Value,
    stale: bool,
}

/// Cache keyed by query identity, shared between queries and commands.
#[derive(Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<String, CachedQuery>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached payload for `key`, unless absent or invalidated.
    pub fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(key)
            .filter(|entry| !entry.stale)
            .map(|entry| entry.payload.clone())
    }

    /// Store a freshly fetched payload under `key`.
    pub fn put(&self, key: &str, payload: Value) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            key.to_string(),
            CachedQuery {
                payload,
                stale: false,
            },
        );
    }

    /// Mark `key` stale so the next read re-fetches from the remote store.
    pub fn invalidate(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap();
        if let Some(entry) = entries.get_mut(key) {
            entry.stale = true;
        }
        tracing::debug!(query = key, "Query invalidated");
    }

    /// Invalidate every cached query.
    pub fn invalidate_all(&self) {
        let mut entries = self.entries.lock().unwrap();
        for entry in entries.values_mut() {
            entry.stale = true;
        }
    }
}
