//! PostgreSQL implementation of PostRepository
//!
//! The listing query is assembled with `QueryBuilder`: filters bind user
//! input as parameters, while ORDER BY columns come from the closed
//! `SortField` enum and are interpolated as trusted identifiers. Soft-deleted
//! posts and posts in inactive categories never leave this layer.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use forum_core::entities::{Category, Post};
use forum_core::query::{SortDirection, SortField};
use forum_core::traits::{PostFilter, PostRepository, RepoResult};
use forum_core::value_objects::EntityId;

use crate::models::{CategoryModel, PostModel};

use super::error::{map_db_error, post_not_found};

const POST_COLUMNS: &str = "p.id, p.title, p.content, p.category_id, p.user_id, p.book_id, \
     p.is_pinned, p.is_locked, p.is_featured, p.is_answered, \
     p.upvotes, p.downvotes, p.vote_score, p.view_count, p.replies_count, \
     p.last_reply_at, p.last_reply_id, p.created_at, p.updated_at, p.deleted_at";

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape LIKE wildcards so a search term matches literally
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

/// Append the WHERE restrictions shared by `search` and `count`
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &PostFilter) {
    builder.push(" WHERE p.deleted_at IS NULL AND c.is_active = TRUE");

    if let Some(category_id) = &filter.category_id {
        builder
            .push(" AND p.category_id = ")
            .push_bind(category_id.to_string());
    }
    if let Some(slug) = &filter.category_slug {
        builder.push(" AND c.slug = ").push_bind(slug.clone());
    }
    if let Some(book_id) = &filter.book_id {
        builder
            .push(" AND p.book_id = ")
            .push_bind(book_id.to_string());
    }
    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", escape_like(search));
        builder
            .push(" AND (p.title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR p.content ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
    if let Some(is_pinned) = filter.is_pinned {
        builder.push(" AND p.is_pinned = ").push_bind(is_pinned);
    }
    if let Some(is_featured) = filter.is_featured {
        builder.push(" AND p.is_featured = ").push_bind(is_featured);
    }
    if let Some(is_answered) = filter.is_answered {
        builder.push(" AND p.is_answered = ").push_bind(is_answered);
    }
    if !filter.exclude_category_ids.is_empty() {
        let excluded: Vec<String> = filter
            .exclude_category_ids
            .iter()
            .map(ToString::to_string)
            .collect();
        builder
            .push(" AND p.category_id <> ALL(")
            .push_bind(excluded)
            .push(")");
    }
}

/// Append the ORDER BY clause; columns come from the closed SortField set
fn push_ordering(builder: &mut QueryBuilder<'_, Postgres>, order: &[(SortField, SortDirection)]) {
    if order.is_empty() {
        return;
    }
    builder.push(" ORDER BY ");
    for (index, (field, direction)) in order.iter().enumerate() {
        if index > 0 {
            builder.push(", ");
        }
        builder.push("p.");
        builder.push(field.as_column());
        builder.push(" ");
        builder.push(direction.as_sql());
        // NULLS LAST keeps never-replied posts at the tail of lastReply mode
        if matches!(field, SortField::LastReplyAt) {
            builder.push(" NULLS LAST");
        }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &EntityId) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM forum_posts p WHERE p.id = $1 AND p.deleted_at IS NULL"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_with_category(&self, id: &EntityId) -> RepoResult<Option<(Post, Category)>> {
        let post = match self.find_by_id(id).await? {
            Some(post) => post,
            None => return Ok(None),
        };

        let category = sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT id, slug, name, color, is_active, is_locked, required_tier
            FROM forum_categories
            WHERE id = $1
            "#,
        )
        .bind(post.category_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        // A post without its category is a referential integrity breach
        let category = category.ok_or_else(|| {
            forum_core::DomainError::InternalError(format!(
                "post {} references missing category {}",
                post.id, post.category_id
            ))
        })?;

        Ok(Some((post, Category::from(category))))
    }

    #[instrument(skip(self, filter, order))]
    async fn search(
        &self,
        filter: &PostFilter,
        order: &[(SortField, SortDirection)],
        offset: i64,
        limit: i64,
    ) -> RepoResult<Vec<Post>> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {POST_COLUMNS} FROM forum_posts p \
             JOIN forum_categories c ON c.id = p.category_id"
        ));
        push_filters(&mut builder, filter);
        push_ordering(&mut builder, order);
        builder.push(" LIMIT ").push_bind(limit);
        builder.push(" OFFSET ").push_bind(offset);

        let results = builder
            .build_query_as::<PostModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self, filter))]
    async fn count(&self, filter: &PostFilter) -> RepoResult<i64> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT COUNT(*) FROM forum_posts p \
             JOIN forum_categories c ON c.id = p.category_id",
        );
        push_filters(&mut builder, filter);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(total)
    }

    #[instrument(skip(self))]
    async fn increment_view_count(&self, id: &EntityId) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE forum_posts
            SET view_count = view_count + 1
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPostRepository>();
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_push_filters_renders_all_dimensions() {
        let filter = PostFilter {
            category_id: Some(EntityId::new("clcat0000000000000000001")),
            category_slug: Some("sci-fi".to_string()),
            book_id: Some(EntityId::new("clbook000000000000000001")),
            search: Some("dune".to_string()),
            is_pinned: Some(true),
            is_featured: Some(false),
            is_answered: None,
            exclude_category_ids: vec![EntityId::new("clcat0000000000000000002")],
        };

        let mut builder = QueryBuilder::<Postgres>::new("SELECT 1 FROM forum_posts p JOIN forum_categories c ON c.id = p.category_id");
        push_filters(&mut builder, &filter);
        let sql = builder.sql().to_string();

        assert!(sql.contains("p.deleted_at IS NULL"));
        assert!(sql.contains("c.is_active = TRUE"));
        assert!(sql.contains("p.category_id = "));
        assert!(sql.contains("c.slug = "));
        assert!(sql.contains("p.book_id = "));
        assert!(sql.contains("ILIKE"));
        assert!(sql.contains("p.is_pinned = "));
        assert!(sql.contains("p.is_featured = "));
        assert!(!sql.contains("p.is_answered = "));
        assert!(sql.contains("<> ALL("));
    }

    #[test]
    fn test_push_ordering_renders_rules() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT 1");
        push_ordering(
            &mut builder,
            &[
                (SortField::IsPinned, SortDirection::Desc),
                (SortField::LastReplyAt, SortDirection::Desc),
                (SortField::CreatedAt, SortDirection::Desc),
            ],
        );
        assert_eq!(
            builder.sql(),
            "SELECT 1 ORDER BY p.is_pinned DESC, p.last_reply_at DESC NULLS LAST, p.created_at DESC"
        );
    }
}
