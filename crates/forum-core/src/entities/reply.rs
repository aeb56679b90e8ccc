//! Reply entity - one node in a post's reply forest
//!
//! Replies self-reference through `parent_reply_id`; roots carry `None`.
//! A parent chain may never exceed `MAX_REPLY_DEPTH` hops.

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// Maximum nesting depth of the reply forest. A reply whose parent already
/// sits at this depth is rejected.
pub const MAX_REPLY_DEPTH: usize = 5;

/// Forum reply entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: EntityId,
    pub post_id: EntityId,
    pub user_id: EntityId,
    pub content: String,
    pub parent_reply_id: Option<EntityId>,
    pub upvotes: i32,
    pub downvotes: i32,
    pub vote_score: i32,
    pub is_best_answer: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Reply {
    /// Create a new reply with zero-initialized vote counters
    pub fn new(
        id: EntityId,
        post_id: EntityId,
        user_id: EntityId,
        content: String,
        parent_reply_id: Option<EntityId>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            post_id,
            user_id,
            content,
            parent_reply_id,
            upvotes: 0,
            downvotes: 0,
            vote_score: 0,
            is_best_answer: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check if the reply is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if the reply starts a thread (has no parent)
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent_reply_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reply_is_zero_initialized() {
        let reply = Reply::new(
            EntityId::new("clreply00000000000000001"),
            EntityId::new("clpost000000000000000001"),
            EntityId::new("cluser000000000000000001"),
            "Agreed, the tone shifts there.".to_string(),
            None,
        );
        assert_eq!(reply.upvotes, 0);
        assert_eq!(reply.downvotes, 0);
        assert_eq!(reply.vote_score, 0);
        assert!(!reply.is_best_answer);
        assert!(reply.is_root());
        assert!(!reply.is_deleted());
    }

    #[test]
    fn test_nested_reply_is_not_root() {
        let reply = Reply::new(
            EntityId::new("clreply00000000000000002"),
            EntityId::new("clpost000000000000000001"),
            EntityId::new("cluser000000000000000001"),
            "Nested".to_string(),
            Some(EntityId::new("clreply00000000000000001")),
        );
        assert!(!reply.is_root());
    }
}
