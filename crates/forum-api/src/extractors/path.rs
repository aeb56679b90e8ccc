//! Path parameter extractors
//!
//! Type-safe extraction of entity identifiers from path parameters.

use forum_core::EntityId;
use serde::Deserialize;

use crate::response::ApiError;

/// Path parameters with post_id
#[derive(Debug, Deserialize)]
pub struct PostIdPath {
    pub post_id: String,
}

impl PostIdPath {
    /// Parse post_id as an EntityId
    pub fn post_id(&self) -> Result<EntityId, ApiError> {
        self.post_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid post_id format"))
    }
}
