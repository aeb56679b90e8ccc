//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the forum_posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category_id: String,
    pub user_id: String,
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
    pub last_reply_at: Option<DateTime<Utc>>,
    pub last_reply_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl PostModel {
    /// Check if the post is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
