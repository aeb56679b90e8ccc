//! Collaborator ports - external systems the forum core consults
//!
//! Content moderation and the response cache are owned elsewhere; the domain
//! layer only defines the seam.

use async_trait::async_trait;

use super::repositories::RepoResult;

/// A single content-policy violation; the message is surfaced verbatim to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ContentViolation(pub String);

/// Content validation collaborator (length + profanity checks).
///
/// Implementations report the first violation only.
pub trait ContentValidator: Send + Sync {
    fn validate(&self, content: &str) -> Result<(), ContentViolation>;
}

/// Response cache collaborator for the post listing.
///
/// Values are opaque JSON documents; expiry is owned by the implementation.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    async fn get(&self, key: &str) -> RepoResult<Option<serde_json::Value>>;

    async fn put(&self, key: &str, value: &serde_json::Value) -> RepoResult<()>;
}
