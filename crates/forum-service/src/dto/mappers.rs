//! Entity to DTO mappers

use forum_core::entities::{Category, Post, Reply, User};
use forum_core::value_objects::EntityId;

use super::responses::{AuthorResponse, CategoryResponse, PostResponse, ReplyResponse};

// ============================================================================
// Author Mappers
// ============================================================================

impl From<&User> for AuthorResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            display_name: user.display_name.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}

impl AuthorResponse {
    /// Placeholder author for rows whose user record no longer resolves
    pub fn deleted(user_id: &EntityId) -> Self {
        Self {
            id: user_id.to_string(),
            username: "[deleted]".to_string(),
            display_name: None,
            avatar_url: None,
        }
    }

    /// Map an optional user, falling back to the deleted placeholder
    pub fn from_lookup(user: Option<&User>, user_id: &EntityId) -> Self {
        user.map_or_else(|| Self::deleted(user_id), Self::from)
    }
}

// ============================================================================
// Category Mappers
// ============================================================================

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            slug: category.slug.clone(),
            name: category.name.clone(),
            color: category.color.clone(),
        }
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

impl PostResponse {
    /// Join a post with its author and category display fields
    pub fn from_parts(post: &Post, author: Option<&User>, category: &Category) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            category: CategoryResponse::from(category),
            author: AuthorResponse::from_lookup(author, &post.user_id),
            book_id: post.book_id.as_ref().map(ToString::to_string),
            is_pinned: post.is_pinned,
            is_locked: post.is_locked,
            is_featured: post.is_featured,
            is_answered: post.is_answered,
            upvotes: post.upvotes,
            downvotes: post.downvotes,
            vote_score: post.vote_score,
            view_count: post.view_count,
            replies_count: post.replies_count,
            last_reply_at: post.last_reply_at,
            last_reply_id: post.last_reply_id.as_ref().map(ToString::to_string),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

// ============================================================================
// Reply Mappers
// ============================================================================

impl ReplyResponse {
    /// Join a reply with its author display fields
    pub fn from_parts(reply: &Reply, author: Option<&User>) -> Self {
        Self {
            id: reply.id.to_string(),
            post_id: reply.post_id.to_string(),
            content: reply.content.clone(),
            author: AuthorResponse::from_lookup(author, &reply.user_id),
            parent_reply_id: reply.parent_reply_id.as_ref().map(ToString::to_string),
            upvotes: reply.upvotes,
            downvotes: reply.downvotes,
            vote_score: reply.vote_score,
            is_best_answer: reply.is_best_answer,
            created_at: reply.created_at,
            updated_at: reply.updated_at,
        }
    }
}
