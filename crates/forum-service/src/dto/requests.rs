//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Body validation here is structural; content policy runs in the
//! moderation collaborator.

use serde::Deserialize;
use validator::Validate;

/// Create reply request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReplyRequest {
    #[validate(length(min = 1, max = 5000, message = "Reply must be 1-5000 characters"))]
    pub content: String,

    /// Parent reply to nest under; omitted for a thread root
    pub parent_reply_id: Option<String>,
}
