//! Reply handlers
//!
//! Endpoints for creating replies and reading a post's reply tree.

use axum::{
    extract::{Path, State},
    Json,
};
use forum_service::{CreateReplyRequest, ReplyResponse, ReplyService, ReplyTreeResponse};

use crate::extractors::{AuthUser, PostIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a reply under a post
///
/// POST /posts/{post_id}/replies
pub async fn create_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
    ValidatedJson(request): ValidatedJson<CreateReplyRequest>,
) -> ApiResult<Created<Json<ReplyResponse>>> {
    let post_id = path.post_id()?;

    let service = ReplyService::new(state.service_context());
    let response = service.create_reply(post_id, auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get a post's replies as a nested tree
///
/// GET /posts/{post_id}/replies
pub async fn list_replies(
    State(state): State<AppState>,
    Path(path): Path<PostIdPath>,
) -> ApiResult<Json<Vec<ReplyTreeResponse>>> {
    let post_id = path.post_id()?;

    let service = ReplyService::new(state.service_context());
    let response = service.list_replies(post_id).await?;
    Ok(Json(response))
}
