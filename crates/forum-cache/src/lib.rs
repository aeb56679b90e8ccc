//! # forum-cache
//!
//! Redis caching layer for the forum read path.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Listing Cache**: TTL-bounded cache of rendered post-list responses,
//!   keyed by the normalized query description
//!
//! ## Example
//!
//! ```ignore
//! use forum_cache::{PostListCache, RedisPool, RedisPoolConfig};
//!
//! // Create Redis pool
//! let config = RedisPoolConfig::default();
//! let pool = RedisPool::new(config)?;
//!
//! // Cache a rendered listing for five minutes
//! let cache = PostListCache::new(pool, 300);
//! cache.put("posts:p1:l20:...", &response_json).await?;
//! ```

pub mod listing;
pub mod pool;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export listing cache
pub use listing::PostListCache;
