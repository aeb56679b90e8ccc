//! Reply database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the forum_replies table
#[derive(Debug, Clone, FromRow)]
pub struct ReplyModel {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub content: String,
    pub parent_reply_id: Option<String>,
    pub upvotes: i32,
    pub downvotes: i32,
    pub vote_score: i32,
    pub is_best_answer: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ReplyModel {
    /// Check if the reply is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if the reply starts a thread
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent_reply_id.is_none()
    }
}
