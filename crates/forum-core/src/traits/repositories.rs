//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Category, Post, Reply, User};
use crate::error::DomainError;
use crate::query::{SortDirection, SortField};
use crate::value_objects::EntityId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find category by ID (active or not; callers decide visibility)
    async fn find_by_id(&self, id: &EntityId) -> RepoResult<Option<Category>>;

    /// Find category by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>>;

    /// List all active categories
    async fn find_all_active(&self) -> RepoResult<Vec<Category>>;
}

// ============================================================================
// Post Repository
// ============================================================================

/// Normalized restrictions applied to a post listing.
///
/// Every field is optional; `exclude_category_ids` carries the categories the
/// caller's tier may not see.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub category_id: Option<EntityId>,
    pub category_slug: Option<String>,
    pub book_id: Option<EntityId>,
    pub search: Option<String>,
    pub is_pinned: Option<bool>,
    pub is_featured: Option<bool>,
    pub is_answered: Option<bool>,
    pub exclude_category_ids: Vec<EntityId>,
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a non-deleted post by ID
    async fn find_by_id(&self, id: &EntityId) -> RepoResult<Option<Post>>;

    /// Find a non-deleted post together with its category
    async fn find_with_category(&self, id: &EntityId) -> RepoResult<Option<(Post, Category)>>;

    /// Page through non-deleted posts in active categories
    async fn search(
        &self,
        filter: &PostFilter,
        order: &[(SortField, SortDirection)],
        offset: i64,
        limit: i64,
    ) -> RepoResult<Vec<Post>>;

    /// Count posts matching `filter` (same visibility rules as `search`)
    async fn count(&self, filter: &PostFilter) -> RepoResult<i64>;

    /// Bump the view counter of a post
    async fn increment_view_count(&self, id: &EntityId) -> RepoResult<()>;
}

// ============================================================================
// Reply Repository
// ============================================================================

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Find a non-deleted reply by ID
    async fn find_by_id(&self, id: &EntityId) -> RepoResult<Option<Reply>>;

    /// Find a non-deleted reply scoped to a post. A reply belonging to a
    /// different post resolves to `None`.
    async fn find_in_post(&self, id: &EntityId, post_id: &EntityId) -> RepoResult<Option<Reply>>;

    /// List all non-deleted replies of a post, oldest first
    async fn find_by_post(&self, post_id: &EntityId) -> RepoResult<Vec<Reply>>;

    /// Insert `reply` and update its post's denormalized aggregates
    /// (`replies_count`, `last_reply_at`, `last_reply_id`) in one atomic
    /// transaction. Either both rows commit or neither does.
    async fn create_with_post_aggregates(&self, reply: &Reply) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: &EntityId) -> RepoResult<Option<User>>;

    /// Find users by ID in one round-trip; missing IDs are simply absent
    async fn find_by_ids(&self, ids: &[EntityId]) -> RepoResult<Vec<User>>;
}
