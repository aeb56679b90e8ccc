//! Forum services
//!
//! Business logic for reply creation and post listing, wired to storage and
//! collaborator ports through `ServiceContext`.

mod context;
mod error;
mod moderation;
mod post;
mod reply;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use moderation::DefaultContentValidator;
pub use post::PostService;
pub use reply::ReplyService;
