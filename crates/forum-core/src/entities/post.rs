//! Post entity - a top-level forum discussion
//!
//! `replies_count`, `last_reply_at`, and `last_reply_id` are a denormalized
//! projection of the reply tree and are written only together with the reply
//! insert, inside one transaction. Vote fields are maintained by the external
//! voting collaborator and are read-through here.

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// Forum post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub category_id: EntityId,
    pub user_id: EntityId,
    pub book_id: Option<EntityId>,
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
    pub last_reply_id: Option<EntityId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Check if the post is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if the post has any replies
    #[inline]
    pub fn has_replies(&self) -> bool {
        self.replies_count > 0
    }

    /// Apply the aggregate updates a newly accepted reply causes.
    ///
    /// Mirrors the storage-side transaction so in-memory state stays
    /// consistent with the committed row.
    pub fn record_reply(&mut self, reply_id: EntityId, created_at: DateTime<Utc>) {
        self.replies_count += 1;
        self.last_reply_at = Some(created_at);
        self.last_reply_id = Some(reply_id);
        self.updated_at = created_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        let now = Utc::now();
        Post {
            id: EntityId::new("clpost000000000000000001"),
            title: "Thoughts on chapter three".to_string(),
            content: "The pacing changes completely here.".to_string(),
            category_id: EntityId::new("clcat0000000000000000001"),
            user_id: EntityId::new("cluser000000000000000001"),
            book_id: None,
            is_pinned: false,
            is_locked: false,
            is_featured: false,
            is_answered: false,
            upvotes: 0,
            downvotes: 0,
            vote_score: 0,
            view_count: 0,
            replies_count: 0,
            last_reply_at: None,
            last_reply_id: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn test_fresh_post_state() {
        let post = post();
        assert!(!post.is_deleted());
        assert!(!post.has_replies());
        assert!(post.last_reply_id.is_none());
    }

    #[test]
    fn test_record_reply_updates_aggregates() {
        let mut post = post();
        let reply_id = EntityId::new("clreply00000000000000001");
        let at = Utc::now();

        post.record_reply(reply_id.clone(), at);

        assert_eq!(post.replies_count, 1);
        assert_eq!(post.last_reply_id, Some(reply_id));
        assert_eq!(post.last_reply_at, Some(at));
    }
}
