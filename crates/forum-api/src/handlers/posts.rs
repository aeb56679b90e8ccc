//! Post handlers
//!
//! Endpoints for the post listing and single-post reads.

use axum::{
    extract::{Path, State},
    Json,
};
use forum_service::{PostListResponse, PostResponse, PostService};

use crate::extractors::{ListQuery, OptionalAuthUser, PostIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// List posts
///
/// GET /posts
pub async fn list_posts(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ListQuery(query): ListQuery,
) -> ApiResult<Json<PostListResponse>> {
    let viewer_tier = auth.0.as_ref().and_then(|user| user.tier.as_deref());

    let service = PostService::new(state.service_context());
    let response = service.list_posts(query, viewer_tier).await?;
    Ok(Json(response))
}

/// Get post by ID
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(path): Path<PostIdPath>,
) -> ApiResult<Json<PostResponse>> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    let response = service.get_post(post_id).await?;
    Ok(Json(response))
}
