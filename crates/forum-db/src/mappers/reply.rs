//! Reply model ↔ entity conversions

use forum_core::entities::Reply;
use forum_core::value_objects::EntityId;

use crate::models::ReplyModel;

impl From<ReplyModel> for Reply {
    fn from(model: ReplyModel) -> Self {
        Self {
            id: EntityId::new(model.id),
            post_id: EntityId::new(model.post_id),
            user_id: EntityId::new(model.user_id),
            content: model.content,
            parent_reply_id: model.parent_reply_id.map(EntityId::new),
            upvotes: model.upvotes,
            downvotes: model.downvotes,
            vote_score: model.vote_score,
            is_best_answer: model.is_best_answer,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
