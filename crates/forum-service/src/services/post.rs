//! Post service
//!
//! Composes the list-query engine with tier gating, the response cache, and
//! the post repository. Also serves the single-post read path.

use std::collections::HashMap;

use forum_core::entities::{Category, User};
use forum_core::query::{order_by, ListPostsQuery, Pagination};
use forum_core::traits::PostFilter;
use forum_core::value_objects::{meets_minimum_tier, EntityId, SubscriptionTier};
use tracing::{debug, instrument, warn};

use crate::dto::{PaginationMeta, PostListResponse, PostResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Tier assumed for anonymous viewers
const ANONYMOUS_TIER: SubscriptionTier = SubscriptionTier::Free;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Serve one page of the post listing.
    ///
    /// The viewer's tier restricts which categories contribute posts; the
    /// cache key carries the effective tier as an extra dimension so gated
    /// listings never cross tiers. Cache failures degrade to a live query.
    #[instrument(skip(self, query))]
    pub async fn list_posts(
        &self,
        query: ListPostsQuery,
        viewer_tier: Option<&str>,
    ) -> ServiceResult<PostListResponse> {
        let categories = self.ctx.category_repo().find_all_active().await?;
        let viewer = viewer_tier.unwrap_or(ANONYMOUS_TIER.as_str());

        let excluded: Vec<EntityId> = categories
            .iter()
            .filter(|category| {
                category
                    .required_tier
                    .as_deref()
                    .is_some_and(|required| !meets_minimum_tier(viewer, required))
            })
            .map(|category| category.id.clone())
            .collect();

        let cache_key = format!("{}:t:{}", query.cache_key(), tier_scope(viewer_tier));
        match self.ctx.list_cache().get(&cache_key).await {
            Ok(Some(value)) => {
                if let Ok(response) = serde_json::from_value::<PostListResponse>(value) {
                    debug!(key = %cache_key, "Post listing served from cache");
                    return Ok(response);
                }
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Post listing cache read failed"),
        }

        let filter = PostFilter {
            category_id: query.category_id.clone(),
            category_slug: query.category_slug.clone(),
            book_id: query.book_id.clone(),
            search: query.search.clone(),
            is_pinned: query.is_pinned,
            is_featured: query.is_featured,
            is_answered: query.is_answered,
            exclude_category_ids: excluded,
        };

        let total = self.ctx.post_repo().count(&filter).await?;
        let posts = self
            .ctx
            .post_repo()
            .search(&filter, &order_by(query.sort), query.offset(), query.limit)
            .await?;

        let authors = self.load_authors(posts.iter().map(|p| p.user_id.clone())).await?;
        let categories_by_id: HashMap<EntityId, Category> = categories
            .into_iter()
            .map(|category| (category.id.clone(), category))
            .collect();

        let post_responses: Vec<PostResponse> = posts
            .iter()
            .filter_map(|post| {
                // A post whose category vanished mid-request is skipped
                // rather than failing the page
                categories_by_id.get(&post.category_id).map(|category| {
                    PostResponse::from_parts(post, authors.get(&post.user_id), category)
                })
            })
            .collect();

        let response = PostListResponse {
            posts: post_responses,
            pagination: PaginationMeta::from(Pagination::calculate(
                query.page,
                query.limit,
                total,
            )),
        };

        if let Ok(value) = serde_json::to_value(&response) {
            if let Err(e) = self.ctx.list_cache().put(&cache_key, &value).await {
                warn!(error = %e, "Post listing cache write failed");
            }
        }

        Ok(response)
    }

    /// Fetch a single post with author and category display fields, bumping
    /// its view counter.
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: EntityId) -> ServiceResult<PostResponse> {
        let (mut post, category) = self
            .ctx
            .post_repo()
            .find_with_category(&post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        // Inactive categories hide their posts entirely
        if !category.is_active {
            return Err(ServiceError::not_found("Post", post_id.to_string()));
        }

        self.ctx.post_repo().increment_view_count(&post.id).await?;
        post.view_count += 1;

        let author = self.ctx.user_repo().find_by_id(&post.user_id).await?;

        Ok(PostResponse::from_parts(&post, author.as_ref(), &category))
    }

    /// Batch-load the authors behind a page of posts
    async fn load_authors(
        &self,
        user_ids: impl Iterator<Item = EntityId>,
    ) -> ServiceResult<HashMap<EntityId, User>> {
        let mut ids: Vec<EntityId> = user_ids.collect();
        ids.sort();
        ids.dedup();

        let users = self.ctx.user_repo().find_by_ids(&ids).await?;
        Ok(users.into_iter().map(|u| (u.id.clone(), u)).collect())
    }
}

/// Collapse a raw viewer tier into the label the cache key carries.
///
/// Unknown labels pass every gate, which gives them the same reach as the
/// top tier; mapping them to it keeps the cache from fragmenting on
/// arbitrary strings.
fn tier_scope(viewer_tier: Option<&str>) -> &'static str {
    match viewer_tier {
        None => ANONYMOUS_TIER.as_str(),
        Some(raw) => match SubscriptionTier::parse(raw) {
            Some(tier) => tier.as_str(),
            None => SubscriptionTier::Scholar.as_str(),
        },
    }
}
