use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::store::TokenStore;

/// Stored value with its computed absolute expiration.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: i64, // UNIX timestamp
}

/// In-memory TTL store: key -> (value, expires_at).
///
/// Clones share the same map, so several client instances built over one
/// `MemoryStore` behave like processes sharing a remote cache.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())) }
    }
}

impl TokenStore for MemoryStore {
    async fn exists(&self, key: &str) -> bool {
        self.get(key).await.is_some()
    }

    async fn get(&self, key: &str) -> Option<String> {
        let map = self.inner.read().await;
        map.get(key)
            .filter(|e| Utc::now().timestamp() < e.expires_at)
            .map(|e| e.value.clone())
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) {
        let entry = Entry {
            value: value.to_string(),
            expires_at: Utc::now().timestamp() + ttl_seconds as i64,
        };
        let mut map = self.inner.write().await;
        map.insert(key.to_string(), entry);
    }

    async fn ttl(&self, key: &str) -> Option<i64> {
        let map = self.inner.read().await;
        map.get(key)
            .map(|e| e.expires_at - Utc::now().timestamp())
            .filter(|remaining| *remaining > 0)
    }
}
