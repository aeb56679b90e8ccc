//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output and `Deserialize`
//! so cached listings can be rehydrated. Field names are camelCase on the
//! wire.

use chrono::{DateTime, Utc};
use forum_core::query::Pagination;
use serde::{Deserialize, Serialize};

// ============================================================================
// Common Response Types
// ============================================================================

/// Pagination metadata for offset-paginated listings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_more: bool,
}

impl From<Pagination> for PaginationMeta {
    fn from(p: Pagination) -> Self {
        Self {
            page: p.page,
            limit: p.limit,
            total: p.total,
            total_pages: p.total_pages,
            has_more: p.has_more,
        }
    }
}

// ============================================================================
// Author / Category Responses
// ============================================================================

/// Author display fields joined into post and reply responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Category display fields joined into post responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub color: String,
}

// ============================================================================
// Post Responses
// ============================================================================

/// A post joined with author and category display fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: CategoryResponse,
    pub author: AuthorResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<String>,
    pub is_pinned: bool,
    pub is_locked: bool,
    pub is_featured: bool,
    pub is_answered: bool,
    pub upvotes: i32,
    pub downvotes: i32,
    pub vote_score: i32,
    pub view_count: i32,
    pub replies_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reply_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reply_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The post listing: one page of posts plus pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub pagination: PaginationMeta,
}

// ============================================================================
// Reply Responses
// ============================================================================

/// A reply joined with author display fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyResponse {
    pub id: String,
    pub post_id: String,
    pub content: String,
    pub author: AuthorResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_reply_id: Option<String>,
    pub upvotes: i32,
    pub downvotes: i32,
    pub vote_score: i32,
    pub is_best_answer: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A reply with its nested children, forming the rendered thread tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyTreeResponse {
    #[serde(flatten)]
    pub reply: ReplyResponse,
    pub replies: Vec<ReplyTreeResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Readiness response with dependency health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: bool,
    pub cache: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool, cache: bool) -> Self {
        Self {
            ready: database && cache,
            database,
            cache,
        }
    }
}
