//! Key-value cache store trait (port)

use std::time::Duration;

use async_trait::async_trait;

use crate::error::DomainError;

/// Expiring key-value storage shared by every request.
/// A `set` replaces the whole value, so readers never observe a partial write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
    /// `ttl` counts from the time of the write
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), DomainError>;
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;
}
