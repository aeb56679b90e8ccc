//! Error handling utilities for repositories

use forum_core::error::DomainError;
use forum_core::value_objects::EntityId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "post not found" error
pub fn post_not_found(id: &EntityId) -> DomainError {
    DomainError::PostNotFound(id.clone())
}
