//! Service context - dependency container for services
//!
//! Holds the repository and collaborator ports every service needs. All
//! dependencies are trait objects, so the container builds the same way over
//! PostgreSQL/Redis in production and over in-memory fakes in tests.

use std::sync::Arc;

use forum_core::traits::{
    CategoryRepository, ContentValidator, PostRepository, ReplyRepository, ResponseCache,
    UserRepository,
};
use forum_core::EntityIdGenerator;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    category_repo: Arc<dyn CategoryRepository>,
    post_repo: Arc<dyn PostRepository>,
    reply_repo: Arc<dyn ReplyRepository>,
    user_repo: Arc<dyn UserRepository>,

    // Collaborators
    content_validator: Arc<dyn ContentValidator>,
    list_cache: Arc<dyn ResponseCache>,

    // Services
    id_generator: Arc<EntityIdGenerator>,
}

impl ServiceContext {
    /// Get the category repository
    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the reply repository
    pub fn reply_repo(&self) -> &dyn ReplyRepository {
        self.reply_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the content validation collaborator
    pub fn content_validator(&self) -> &dyn ContentValidator {
        self.content_validator.as_ref()
    }

    /// Get the listing response cache
    pub fn list_cache(&self) -> &dyn ResponseCache {
        self.list_cache.as_ref()
    }

    /// Generate a new EntityId
    pub fn generate_id(&self) -> forum_core::EntityId {
        self.id_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("collaborators", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    category_repo: Option<Arc<dyn CategoryRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    reply_repo: Option<Arc<dyn ReplyRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    content_validator: Option<Arc<dyn ContentValidator>>,
    list_cache: Option<Arc<dyn ResponseCache>>,
    id_generator: Option<Arc<EntityIdGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            category_repo: None,
            post_repo: None,
            reply_repo: None,
            user_repo: None,
            content_validator: None,
            list_cache: None,
            id_generator: None,
        }
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn reply_repo(mut self, repo: Arc<dyn ReplyRepository>) -> Self {
        self.reply_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn content_validator(mut self, validator: Arc<dyn ContentValidator>) -> Self {
        self.content_validator = Some(validator);
        self
    }

    pub fn list_cache(mut self, cache: Arc<dyn ResponseCache>) -> Self {
        self.list_cache = Some(cache);
        self
    }

    pub fn id_generator(mut self, generator: Arc<EntityIdGenerator>) -> Self {
        self.id_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext {
            category_repo: self
                .category_repo
                .ok_or_else(|| ServiceError::validation("category_repo is required"))?,
            post_repo: self
                .post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            reply_repo: self
                .reply_repo
                .ok_or_else(|| ServiceError::validation("reply_repo is required"))?,
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            content_validator: self
                .content_validator
                .ok_or_else(|| ServiceError::validation("content_validator is required"))?,
            list_cache: self
                .list_cache
                .ok_or_else(|| ServiceError::validation("list_cache is required"))?,
            id_generator: self.id_generator.unwrap_or_default(),
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
