//! Post list-query extractor
//!
//! Deserializes the raw query string and normalizes it through the
//! forum-core query engine. Malformed values degrade to defaults; this
//! extractor never rejects a request.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use forum_core::query::{ListPostsQuery, RawListPostsQuery};

use crate::response::ApiError;

/// Normalized post-list query parameters
#[derive(Debug, Clone)]
pub struct ListQuery(pub ListPostsQuery);

#[async_trait]
impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Query::<RawListPostsQuery>::from_request_parts(parts, state)
            .await
            .map(|Query(raw)| raw)
            .unwrap_or_default();

        Ok(Self(ListPostsQuery::from_raw(&raw)))
    }
}
