//! In-memory fakes backing the service unit tests
//!
//! One `InMemoryForum` implements every repository port over mutex-guarded
//! vectors; `create_with_post_aggregates` mirrors the storage transaction so
//! aggregate invariants can be asserted without a database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use forum_core::entities::{Category, Post, Reply, User};
use forum_core::query::{SortDirection, SortField};
use forum_core::traits::{
    CategoryRepository, ContentValidator, ContentViolation, PostFilter, PostRepository,
    RepoResult, ReplyRepository, ResponseCache, UserRepository,
};
use forum_core::value_objects::EntityId;
use forum_core::DomainError;

use super::context::{ServiceContext, ServiceContextBuilder};

// ============================================================================
// Entity builders
// ============================================================================

pub fn id(tag: &str) -> EntityId {
    EntityId::new(format!("c{tag:0>23}"))
}

pub fn category(tag: &str, slug: &str) -> Category {
    Category {
        id: id(tag),
        slug: slug.to_string(),
        name: slug.to_string(),
        color: "#4a90d9".to_string(),
        is_active: true,
        is_locked: false,
        required_tier: None,
    }
}

pub fn user(tag: &str) -> User {
    User {
        id: id(tag),
        username: format!("user{tag}"),
        display_name: None,
        avatar_url: None,
        tier: "FREE".to_string(),
    }
}

pub fn post(tag: &str, category_id: &EntityId, user_id: &EntityId) -> Post {
    let now = Utc::now();
    Post {
        id: id(tag),
        title: format!("Post {tag}"),
        content: "Discussion body".to_string(),
        category_id: category_id.clone(),
        user_id: user_id.clone(),
        book_id: None,
        is_pinned: false,
        is_locked: false,
        is_featured: false,
        is_answered: false,
        upvotes: 0,
        downvotes: 0,
        vote_score: 0,
        view_count: 0,
        replies_count: 0,
        last_reply_at: None,
        last_reply_id: None,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

// ============================================================================
// In-memory forum store
// ============================================================================

#[derive(Default)]
pub struct InMemoryForum {
    pub categories: Mutex<Vec<Category>>,
    pub posts: Mutex<Vec<Post>>,
    pub replies: Mutex<Vec<Reply>>,
    pub users: Mutex<Vec<User>>,
}

impl InMemoryForum {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_category(&self, category: Category) {
        self.categories.lock().unwrap().push(category);
    }

    pub fn add_post(&self, post: Post) {
        self.posts.lock().unwrap().push(post);
    }

    pub fn add_reply(&self, reply: Reply) {
        self.replies.lock().unwrap().push(reply);
    }

    pub fn add_user(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    pub fn post_by_id(&self, id: &EntityId) -> Option<Post> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
    }

    fn matches(&self, post: &Post, filter: &PostFilter) -> bool {
        if post.deleted_at.is_some() {
            return false;
        }
        let categories = self.categories.lock().unwrap();
        let Some(category) = categories.iter().find(|c| c.id == post.category_id) else {
            return false;
        };
        if !category.is_active {
            return false;
        }
        if let Some(category_id) = &filter.category_id {
            if &post.category_id != category_id {
                return false;
            }
        }
        if let Some(slug) = &filter.category_slug {
            if &category.slug != slug {
                return false;
            }
        }
        if let Some(book_id) = &filter.book_id {
            if post.book_id.as_ref() != Some(book_id) {
                return false;
            }
        }
        if let Some(search) = &filter.search {
            let needle = search.to_lowercase();
            if !post.title.to_lowercase().contains(&needle)
                && !post.content.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(is_pinned) = filter.is_pinned {
            if post.is_pinned != is_pinned {
                return false;
            }
        }
        if let Some(is_featured) = filter.is_featured {
            if post.is_featured != is_featured {
                return false;
            }
        }
        if let Some(is_answered) = filter.is_answered {
            if post.is_answered != is_answered {
                return false;
            }
        }
        !filter.exclude_category_ids.contains(&post.category_id)
    }
}

fn compare(a: &Post, b: &Post, order: &[(SortField, SortDirection)]) -> std::cmp::Ordering {
    for (field, direction) in order {
        let ordering = match field {
            SortField::IsPinned => a.is_pinned.cmp(&b.is_pinned),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::VoteScore => a.vote_score.cmp(&b.vote_score),
            SortField::ViewCount => a.view_count.cmp(&b.view_count),
            SortField::LastReplyAt => a.last_reply_at.cmp(&b.last_reply_at),
        };
        let ordering = match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        if ordering != std::cmp::Ordering::Equal {
            return ordering;
        }
    }
    std::cmp::Ordering::Equal
}

#[async_trait]
impl CategoryRepository for InMemoryForum {
    async fn find_by_id(&self, id: &EntityId) -> RepoResult<Option<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| &c.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.slug == slug)
            .cloned())
    }

    async fn find_all_active(&self) -> RepoResult<Vec<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PostRepository for InMemoryForum {
    async fn find_by_id(&self, id: &EntityId) -> RepoResult<Option<Post>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id && p.deleted_at.is_none())
            .cloned())
    }

    async fn find_with_category(&self, id: &EntityId) -> RepoResult<Option<(Post, Category)>> {
        let post = match PostRepository::find_by_id(self, id).await? {
            Some(post) => post,
            None => return Ok(None),
        };
        let category = self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == post.category_id)
            .cloned()
            .ok_or_else(|| DomainError::InternalError("category missing".to_string()))?;
        Ok(Some((post, category)))
    }

    async fn search(
        &self,
        filter: &PostFilter,
        order: &[(SortField, SortDirection)],
        offset: i64,
        limit: i64,
    ) -> RepoResult<Vec<Post>> {
        let mut matched: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| self.matches(p, filter))
            .cloned()
            .collect();
        matched.sort_by(|a, b| compare(a, b, order));
        Ok(matched
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count(&self, filter: &PostFilter) -> RepoResult<i64> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| self.matches(p, filter))
            .count() as i64)
    }

    async fn increment_view_count(&self, id: &EntityId) -> RepoResult<()> {
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|p| &p.id == id && p.deleted_at.is_none())
            .ok_or_else(|| DomainError::PostNotFound(id.clone()))?;
        post.view_count += 1;
        Ok(())
    }
}

#[async_trait]
impl ReplyRepository for InMemoryForum {
    async fn find_by_id(&self, id: &EntityId) -> RepoResult<Option<Reply>> {
        Ok(self
            .replies
            .lock()
            .unwrap()
            .iter()
            .find(|r| &r.id == id && r.deleted_at.is_none())
            .cloned())
    }

    async fn find_in_post(&self, id: &EntityId, post_id: &EntityId) -> RepoResult<Option<Reply>> {
        Ok(self
            .replies
            .lock()
            .unwrap()
            .iter()
            .find(|r| &r.id == id && &r.post_id == post_id && r.deleted_at.is_none())
            .cloned())
    }

    async fn find_by_post(&self, post_id: &EntityId) -> RepoResult<Vec<Reply>> {
        let mut replies: Vec<Reply> = self
            .replies
            .lock()
            .unwrap()
            .iter()
            .filter(|r| &r.post_id == post_id && r.deleted_at.is_none())
            .cloned()
            .collect();
        replies.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(replies)
    }

    async fn create_with_post_aggregates(&self, reply: &Reply) -> RepoResult<()> {
        // Post lock held across both writes, mirroring the transaction
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|p| p.id == reply.post_id && p.deleted_at.is_none())
            .ok_or_else(|| DomainError::PostNotFound(reply.post_id.clone()))?;

        self.replies.lock().unwrap().push(reply.clone());
        post.record_reply(reply.id.clone(), reply.created_at);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryForum {
    async fn find_by_id(&self, id: &EntityId) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.id == id)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[EntityId]) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }
}

// ============================================================================
// Collaborator fakes
// ============================================================================

/// Content validator that accepts everything
pub struct AcceptAllValidator;

impl ContentValidator for AcceptAllValidator {
    fn validate(&self, _content: &str) -> Result<(), ContentViolation> {
        Ok(())
    }
}

/// Content validator that rejects everything with a fixed message
pub struct RejectingValidator(pub String);

impl ContentValidator for RejectingValidator {
    fn validate(&self, _content: &str) -> Result<(), ContentViolation> {
        Err(ContentViolation(self.0.clone()))
    }
}

/// HashMap-backed response cache with hit/store counters
#[derive(Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, serde_json::Value>>,
    pub hits: AtomicUsize,
    pub stores: AtomicUsize,
}

impl InMemoryCache {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.lock().unwrap().keys().cloned().collect()
    }
}

#[async_trait]
impl ResponseCache for InMemoryCache {
    async fn get(&self, key: &str) -> RepoResult<Option<serde_json::Value>> {
        let value = self.entries.lock().unwrap().get(key).cloned();
        if value.is_some() {
            self.hits.fetch_add(1, Ordering::SeqCst);
        }
        Ok(value)
    }

    async fn put(&self, key: &str, value: &serde_json::Value) -> RepoResult<()> {
        self.stores.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.clone());
        Ok(())
    }
}

// ============================================================================
// Context assembly
// ============================================================================

pub fn context(store: &Arc<InMemoryForum>, cache: &Arc<InMemoryCache>) -> ServiceContext {
    context_with_validator(store, cache, Arc::new(AcceptAllValidator))
}

pub fn context_with_validator(
    store: &Arc<InMemoryForum>,
    cache: &Arc<InMemoryCache>,
    validator: Arc<dyn ContentValidator>,
) -> ServiceContext {
    ServiceContextBuilder::new()
        .category_repo(store.clone())
        .post_repo(store.clone())
        .reply_repo(store.clone())
        .user_repo(store.clone())
        .content_validator(validator)
        .list_cache(cache.clone())
        .build()
        .expect("test context must build")
}
