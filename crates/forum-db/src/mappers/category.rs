//! Category model ↔ entity conversions

use forum_core::entities::Category;
use forum_core::value_objects::EntityId;

use crate::models::CategoryModel;

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Self {
            id: EntityId::new(model.id),
            slug: model.slug,
            name: model.name,
            color: model.color,
            is_active: model.is_active,
            is_locked: model.is_locked,
            required_tier: model.required_tier,
        }
    }
}
