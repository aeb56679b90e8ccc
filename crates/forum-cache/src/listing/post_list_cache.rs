//! Rendered post-list responses cached in Redis.
//!
//! Values are opaque JSON documents keyed by the normalized query description
//! (plus the viewer's effective tier, appended by the service). Entries expire
//! on a fixed TTL; there is no explicit invalidation, so a listing may lag a
//! new reply by at most the TTL.

use async_trait::async_trait;
use forum_core::traits::{RepoResult, ResponseCache};
use forum_core::DomainError;

use crate::pool::RedisPool;

/// Key prefix for cached listings
const POST_LIST_PREFIX: &str = "forum:";

/// Default TTL for cached listings (5 minutes)
const DEFAULT_POST_LIST_TTL: u64 = 300;

/// Redis-backed response cache for post listings
#[derive(Clone)]
pub struct PostListCache {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl PostListCache {
    /// Create a cache with the given TTL
    #[must_use]
    pub fn new(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Create a cache with the default TTL
    #[must_use]
    pub fn with_default_ttl(pool: RedisPool) -> Self {
        Self::new(pool, DEFAULT_POST_LIST_TTL)
    }

    /// TTL applied to new entries, in seconds
    #[must_use]
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Generate the Redis key for a listing key
    fn key(listing_key: &str) -> String {
        format!("{POST_LIST_PREFIX}{listing_key}")
    }
}

#[async_trait]
impl ResponseCache for PostListCache {
    async fn get(&self, key: &str) -> RepoResult<Option<serde_json::Value>> {
        let value = self
            .pool
            .get_value::<serde_json::Value>(&Self::key(key))
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        if value.is_some() {
            tracing::debug!(key = %key, "Post list cache hit");
        }

        Ok(value)
    }

    async fn put(&self, key: &str, value: &serde_json::Value) -> RepoResult<()> {
        self.pool
            .set(&Self::key(key), value, Some(self.ttl_seconds))
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        tracing::debug!(key = %key, ttl = self.ttl_seconds, "Post list cached");

        Ok(())
    }
}
