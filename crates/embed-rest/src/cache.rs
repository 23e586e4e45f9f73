//! Response payload cache.
//!
//! Caching is opt-in per call and keyed per operation and per request key
//! (the products listing keys on its `fields` selector). The default
//! in-memory cache is unbounded and lives as long as the client; swap in
//! another [`PayloadCache`] implementation for eviction policies.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

/// Cache for API response payloads.
pub trait PayloadCache: Send + Sync {
    /// Look up the payload cached for an operation and key.
    fn get(&self, operation: &str, key: &str) -> Option<Value>;

    /// Store a payload for an operation and key.
    fn put(&self, operation: &str, key: &str, payload: Value);

    /// Drop every cached payload.
    fn clear(&self);
}

/// Unbounded in-memory cache.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<(String, String), Value>>,
}

impl MemoryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PayloadCache for MemoryCache {
    fn get(&self, operation: &str, key: &str) -> Option<Value> {
        self.entries
            .lock()
            .ok()
            .and_then(|e| e.get(&(operation.to_string(), key.to_string())).cloned())
    }

    fn put(&self, operation: &str, key: &str, payload: Value) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert((operation.to_string(), key.to_string()), payload);
        }
    }

    fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}
