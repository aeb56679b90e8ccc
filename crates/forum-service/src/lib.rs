//! # forum-service
//!
//! Application layer: the Reply Tree Manager, the post listing use case, the
//! content moderation collaborator, and the request/response DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AuthorResponse, CategoryResponse, CreateReplyRequest, HealthResponse, PaginationMeta,
    PostListResponse, PostResponse, ReadinessResponse, ReplyResponse, ReplyTreeResponse,
};
pub use services::{
    DefaultContentValidator, PostService, ReplyService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
