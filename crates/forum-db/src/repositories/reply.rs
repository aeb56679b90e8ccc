//! PostgreSQL implementation of ReplyRepository
//!
//! `create_with_post_aggregates` is the only write path for replies: the
//! reply insert and the parent post's denormalized counters commit in one
//! transaction, serialized against concurrent writers by the row lock the
//! UPDATE takes on the post.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Reply;
use forum_core::traits::{RepoResult, ReplyRepository};
use forum_core::value_objects::EntityId;

use crate::models::ReplyModel;

use super::error::{map_db_error, post_not_found};

const REPLY_COLUMNS: &str = "id, post_id, user_id, content, parent_reply_id, \
     upvotes, downvotes, vote_score, is_best_answer, created_at, updated_at, deleted_at";

/// PostgreSQL implementation of ReplyRepository
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    /// Create a new PgReplyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &EntityId) -> RepoResult<Option<Reply>> {
        let result = sqlx::query_as::<_, ReplyModel>(&format!(
            "SELECT {REPLY_COLUMNS} FROM forum_replies WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reply::from))
    }

    #[instrument(skip(self))]
    async fn find_in_post(&self, id: &EntityId, post_id: &EntityId) -> RepoResult<Option<Reply>> {
        let result = sqlx::query_as::<_, ReplyModel>(&format!(
            "SELECT {REPLY_COLUMNS} FROM forum_replies \
             WHERE id = $1 AND post_id = $2 AND deleted_at IS NULL"
        ))
        .bind(id.as_str())
        .bind(post_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reply::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: &EntityId) -> RepoResult<Vec<Reply>> {
        let results = sqlx::query_as::<_, ReplyModel>(&format!(
            "SELECT {REPLY_COLUMNS} FROM forum_replies \
             WHERE post_id = $1 AND deleted_at IS NULL \
             ORDER BY created_at ASC"
        ))
        .bind(post_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reply::from).collect())
    }

    #[instrument(skip(self, reply))]
    async fn create_with_post_aggregates(&self, reply: &Reply) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO forum_replies
                (id, post_id, user_id, content, parent_reply_id,
                 upvotes, downvotes, vote_score, is_best_answer,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(reply.id.as_str())
        .bind(reply.post_id.as_str())
        .bind(reply.user_id.as_str())
        .bind(&reply.content)
        .bind(reply.parent_reply_id.as_ref().map(EntityId::as_str))
        .bind(reply.upvotes)
        .bind(reply.downvotes)
        .bind(reply.vote_score)
        .bind(reply.is_best_answer)
        .bind(reply.created_at)
        .bind(reply.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let updated = sqlx::query(
            r#"
            UPDATE forum_posts
            SET replies_count = replies_count + 1,
                last_reply_at = $2,
                last_reply_id = $3,
                updated_at = $2
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(reply.post_id.as_str())
        .bind(reply.created_at)
        .bind(reply.id.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Post vanished between the service check and the commit; dropping
        // the transaction rolls the insert back with it.
        if updated.rows_affected() == 0 {
            return Err(post_not_found(&reply.post_id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReplyRepository>();
    }
}
