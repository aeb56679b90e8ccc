//! Test fixtures and data seeding
//!
//! Posts, categories, and users are created by out-of-scope collaborators in
//! production, so the tests seed those rows directly through the database.

use anyhow::Result;
use forum_common::JwtService;
use forum_core::{EntityId, EntityIdGenerator};
use serde_json::json;
use sqlx::PgPool;

/// Seeded forum data rooted at one category
pub struct ForumFixture {
    pub pool: PgPool,
    generator: EntityIdGenerator,
    pub category_id: EntityId,
    pub category_slug: String,
}

impl ForumFixture {
    /// Connect to the test database and seed one active category
    pub async fn create() -> Result<Self> {
        let pool = forum_db::create_pool_from_env().await?;

        let migrations =
            std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../crates/forum-db/migrations");
        sqlx::migrate::Migrator::new(migrations)
            .await?
            .run(&pool)
            .await?;

        let generator = EntityIdGenerator::new();
        let category_id = generator.generate();
        let category_slug = format!("it-{category_id}");

        sqlx::query(
            "INSERT INTO forum_categories (id, slug, name, color) VALUES ($1, $2, $3, $4)",
        )
        .bind(category_id.as_str())
        .bind(&category_slug)
        .bind("Integration Tests")
        .bind("#4a90d9")
        .execute(&pool)
        .await?;

        Ok(Self {
            pool,
            generator,
            category_id,
            category_slug,
        })
    }

    /// Seed a user with the given tier, returning its id
    pub async fn seed_user(&self, tier: &str) -> Result<EntityId> {
        let id = self.generator.generate();
        sqlx::query("INSERT INTO users (id, username, tier) VALUES ($1, $2, $3)")
            .bind(id.as_str())
            .bind(format!("user-{id}"))
            .bind(tier)
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    /// Seed an open post in the fixture category, returning its id
    pub async fn seed_post(&self, author: &EntityId, title: &str) -> Result<EntityId> {
        self.seed_post_in(author, title, &self.category_id).await
    }

    /// Seed a post in a specific category
    pub async fn seed_post_in(
        &self,
        author: &EntityId,
        title: &str,
        category_id: &EntityId,
    ) -> Result<EntityId> {
        let id = self.generator.generate();
        sqlx::query(
            "INSERT INTO forum_posts (id, title, content, category_id, user_id) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id.as_str())
        .bind(title)
        .bind("Seeded discussion body")
        .bind(category_id.as_str())
        .bind(author.as_str())
        .execute(&self.pool)
        .await?;
        Ok(id)
    }

    /// Lock a seeded post against new replies
    pub async fn lock_post(&self, post_id: &EntityId) -> Result<()> {
        sqlx::query("UPDATE forum_posts SET is_locked = TRUE WHERE id = $1")
            .bind(post_id.as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Current aggregate columns of a post
    pub async fn post_aggregates(&self, post_id: &EntityId) -> Result<(i32, Option<String>)> {
        let row: (i32, Option<String>) = sqlx::query_as(
            "SELECT replies_count, last_reply_id FROM forum_posts WHERE id = $1",
        )
        .bind(post_id.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}

/// Mint an access token for a seeded user, signed with the test secret
pub fn access_token(user_id: &EntityId, tier: &str) -> Result<String> {
    let secret =
        std::env::var("JWT_SECRET").map_err(|_| anyhow::anyhow!("JWT_SECRET not set"))?;
    let service = JwtService::new(&secret, 900);
    Ok(service.issue_access_token(user_id, Some(tier.to_string()))?)
}

/// JSON body for a reply-creation request
pub fn reply_body(content: &str, parent_reply_id: Option<&str>) -> serde_json::Value {
    match parent_reply_id {
        Some(parent) => json!({ "content": content, "parentReplyId": parent }),
        None => json!({ "content": content }),
    }
}
