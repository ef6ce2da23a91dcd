use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;

use super::ProviderError;

/// Append-only memoization table for provider responses, keyed by the
/// exact request signature. Lives as long as the owning client. Not a
/// general cache: no eviction, no TTL, no size bound.
#[derive(Debug, Default)]
pub(crate) struct MemoCache {
    entries: Mutex<HashMap<String, Result<Value, ProviderError>>>,
}

impl MemoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical key for an endpoint path and its query pairs.
    pub fn key(path: &str, params: &[(&str, String)]) -> String {
        let mut key = String::from(path);
        for (name, value) in params {
            key.push('&');
            key.push_str(name);
            key.push('=');
            key.push_str(value);
        }
        key
    }

    pub fn get(&self, key: &str) -> Option<Result<Value, ProviderError>> {
        self.entries.lock().get(key).cloned()
    }

    pub fn insert(&self, key: String, value: Result<Value, ProviderError>) {
        self.entries.lock().insert(key, value);
    }
}
