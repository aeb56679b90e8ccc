//! Data transfer objects
//!
//! Request DTOs validate inbound bodies; response DTOs shape what the API
//! returns. Responses also deserialize because the listing cache round-trips
//! them through Redis.

mod mappers;
mod requests;
mod responses;

pub use requests::CreateReplyRequest;
pub use responses::{
    AuthorResponse, CategoryResponse, HealthResponse, PaginationMeta, PostListResponse,
    PostResponse, ReadinessResponse, ReplyResponse, ReplyTreeResponse,
};
