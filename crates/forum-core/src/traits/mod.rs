//! Ports - interfaces the domain layer requires from infrastructure

mod collaborators;
mod repositories;

pub use collaborators::{ContentValidator, ContentViolation, ResponseCache};
pub use repositories::{
    CategoryRepository, PostFilter, PostRepository, RepoResult, ReplyRepository, UserRepository,
};
