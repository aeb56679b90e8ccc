//! Post model ↔ entity conversions

use forum_core::entities::Post;
use forum_core::value_objects::EntityId;

use crate::models::PostModel;

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Self {
            id: EntityId::new(model.id),
            title: model.title,
            content: model.content,
            category_id: EntityId::new(model.category_id),
            user_id: EntityId::new(model.user_id),
            book_id: model.book_id.map(EntityId::new),
            is_pinned: model.is_pinned,
            is_locked: model.is_locked,
            is_featured: model.is_featured,
            is_answered: model.is_answered,
            upvotes: model.upvotes,
            downvotes: model.downvotes,
            vote_score: model.vote_score,
            view_count: model.view_count,
            replies_count: model.replies_count,
            last_reply_at: model.last_reply_at,
            last_reply_id: model.last_reply_id.map(EntityId::new),
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
