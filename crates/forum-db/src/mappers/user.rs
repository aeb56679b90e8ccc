//! User model ↔ entity conversions

use forum_core::entities::User;
use forum_core::value_objects::EntityId;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        Self {
            id: EntityId::new(model.id),
            username: model.username,
            display_name: model.display_name,
            avatar_url: model.avatar_url,
            tier: model.tier,
        }
    }
}
