use dashmap::DashMap;

use super::entry::Entry;

/// Concurrent map of string values with absolute expiry times in milliseconds.
/// Expired entries are dropped lazily on read, or in bulk by `purge_expired`.
pub struct KvStore {
    map: DashMap<String, Entry>,
}

impl Default for KvStore {
    fn default() -> Self {
        Self {
            map: DashMap::new(),
        }
    }
}

impl KvStore {
    /// `ttl_ms` of 0 means the value never expires
    pub fn set(&self, key: String, value: String, ttl_ms: u64, now_ms: u64) {
        let expires_at_ms = if ttl_ms == 0 {
            0
        } else {
            now_ms.saturating_add(ttl_ms)
        };
        let e = Entry {
            value,
            expires_at_ms,
        };
        self.map.insert(key, e);
    }

    /// Value and remaining ttl (0 when the entry never expires)
    pub fn get(&self, key: &str, now_ms: u64) -> Option<(String, u64)> {
        let g = self.map.get(key)?;
        if g.is_expired(now_ms) {
            drop(g);
            self.map.remove(key);
            return None;
        }
        let ttl_rem = if g.expires_at_ms == 0 {
            0
        } else {
            g.expires_at_ms.saturating_sub(now_ms)
        };
        Some((g.value.clone(), ttl_rem))
    }

    pub fn del(&self, key: &str) -> bool {
        self.map.remove(key).is_some()
    }

    pub fn len(&self) -> u64 {
        self.map.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// List all live keys matching the given prefix (empty = all keys)
    pub fn keys(&self, prefix: &str, now_ms: u64) -> Vec<String> {
        self.map
            .iter()
            .filter(|r| r.key().starts_with(prefix) && !r.is_expired(now_ms))
            .map(|r| r.key().clone())
            .collect()
    }

    /// Drop every expired entry, returns how many were removed
    pub fn purge_expired(&self, now_ms: u64) -> usize {
        let before = self.map.len();
        self.map.retain(|_, e| !e.is_expired(now_ms));
        before.saturating_sub(self.map.len())
    }
}
