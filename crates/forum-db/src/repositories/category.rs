//! PostgreSQL implementation of CategoryRepository
//!
//! Categories are owned by forum administration; this repository is
//! read-only.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Category;
use forum_core::traits::{CategoryRepository, RepoResult};
use forum_core::value_objects::EntityId;

use crate::models::CategoryModel;

use super::error::map_db_error;

const CATEGORY_COLUMNS: &str = "id, slug, name, color, is_active, is_locked, required_tier";

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &EntityId) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM forum_categories WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM forum_categories WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn find_all_active(&self) -> RepoResult<Vec<Category>> {
        let results = sqlx::query_as::<_, CategoryModel>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM forum_categories WHERE is_active = TRUE ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }
}
