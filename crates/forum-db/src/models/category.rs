//! Category database model

use sqlx::FromRow;

/// Database model for the forum_categories table
#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub color: String,
    pub is_active: bool,
    pub is_locked: bool,
    pub required_tier: Option<String>,
}

impl CategoryModel {
    /// Check if the category is visible at all
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.is_active
    }
}
