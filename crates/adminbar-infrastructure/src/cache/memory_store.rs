// ============================================================================
// Admin Bar Infrastructure - In-Memory Cache Store
// File: crates/adminbar-infrastructure/src/cache/memory_store.rs
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use adminbar_core::error::DomainError;
use adminbar_core::repositories::CacheStore;

use super::kv::KvStore;
use crate::time::now_ms;

/// Process-local [`CacheStore`] backed by [`KvStore`]. Clones share storage.
#[derive(Clone, Default)]
pub struct MemoryCacheStore {
    kv: Arc<KvStore>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(kv: Arc<KvStore>) -> Self {
        Self { kv }
    }

    pub fn keys(&self, prefix: &str) -> Vec<String> {
        self.kv.keys(prefix, now_ms())
    }

    pub fn purge_expired(&self) -> usize {
        let removed = self.kv.purge_expired(now_ms());
        if removed > 0 {
            debug!("Purged {} expired cache entries", removed);
        }
        removed
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.kv.get(key, now_ms()).map(|(value, _)| value))
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), DomainError> {
        // A zero ttl would mean "never expires" to the kv layer
        let ttl_ms = (ttl.as_millis() as u64).max(1);
        self.kv.set(key.to_string(), value, ttl_ms, now_ms());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.kv.del(key))
    }
}
