//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and the normalized
//! post-list query.

mod auth;
mod list_query;
mod path;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use list_query::ListQuery;
pub use path::PostIdPath;
pub use validated::ValidatedJson;
