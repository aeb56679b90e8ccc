//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::EntityId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(EntityId),

    #[error("Reply not found: {0}")]
    ReplyNotFound(EntityId),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(EntityId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    ContentRejected(String),

    #[error("maximum reply depth reached")]
    ReplyDepthExceeded { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Post is locked")]
    PostLocked(EntityId),

    #[error("Category is locked")]
    CategoryLocked(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::ReplyNotFound(_) => "UNKNOWN_REPLY",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::UserNotFound(_) => "UNKNOWN_USER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ContentRejected(_) => "CONTENT_REJECTED",
            Self::ReplyDepthExceeded { .. } => "REPLY_DEPTH_EXCEEDED",

            // Authorization
            Self::PostLocked(_) => "POST_LOCKED",
            Self::CategoryLocked(_) => "CATEGORY_LOCKED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PostNotFound(_)
                | Self::ReplyNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::UserNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::ContentRejected(_) | Self::ReplyDepthExceeded { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::PostLocked(_) | Self::CategoryLocked(_))
    }
}
