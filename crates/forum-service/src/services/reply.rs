//! Reply service
//!
//! Validates and creates replies, enforces the nesting-depth limit, and
//! commits each accepted reply together with its post's denormalized
//! aggregates. Also renders the read-side reply tree.

use std::collections::HashMap;

use forum_core::entities::{Category, Post, Reply, User, MAX_REPLY_DEPTH};
use forum_core::value_objects::EntityId;
use forum_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CreateReplyRequest, ReplyResponse, ReplyTreeResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Hard cap on ancestor lookups during the depth walk; a well-formed tree
/// never reaches it, so hitting the cap means a cycle or corrupted chain.
const MAX_ANCESTOR_HOPS: usize = MAX_REPLY_DEPTH + 1;

/// Reply service
pub struct ReplyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReplyService<'a> {
    /// Create a new ReplyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new reply under a post, optionally nested under a parent
    /// reply.
    ///
    /// Checks run in a fixed order: post resolution, category visibility,
    /// lock state, content policy, parent resolution, depth limit. The insert
    /// and the post's aggregate update commit atomically.
    #[instrument(skip(self, request))]
    pub async fn create_reply(
        &self,
        post_id: EntityId,
        author_id: EntityId,
        request: CreateReplyRequest,
    ) -> ServiceResult<ReplyResponse> {
        let (post, category) = self.resolve_open_post(&post_id).await?;

        self.ctx
            .content_validator()
            .validate(&request.content)
            .map_err(|violation| DomainError::ContentRejected(violation.0))?;

        let parent = match &request.parent_reply_id {
            Some(raw) => Some(self.resolve_parent(raw, &post.id).await?),
            None => None,
        };

        if let Some(parent) = &parent {
            let depth = self.chain_depth(parent, &post.id).await?;
            if depth >= MAX_REPLY_DEPTH {
                return Err(
                    DomainError::ReplyDepthExceeded { max: MAX_REPLY_DEPTH }.into(),
                );
            }
        }

        let reply = Reply::new(
            self.ctx.generate_id(),
            post.id.clone(),
            author_id.clone(),
            request.content,
            parent.as_ref().map(|p| p.id.clone()),
        );

        self.ctx
            .reply_repo()
            .create_with_post_aggregates(&reply)
            .await?;

        let author = self
            .ctx
            .user_repo()
            .find_by_id(&author_id)
            .await?
            .ok_or_else(|| ServiceError::internal("Reply author not found"))?;

        info!(
            user_id = %author_id,
            post_id = %post.id,
            reply_id = %reply.id,
            parent_reply_id = ?reply.parent_reply_id,
            category = %category.slug,
            "Reply created"
        );

        Ok(ReplyResponse::from_parts(&reply, Some(&author)))
    }

    /// List a post's replies as a nested tree, oldest first at every level
    #[instrument(skip(self))]
    pub async fn list_replies(&self, post_id: EntityId) -> ServiceResult<Vec<ReplyTreeResponse>> {
        // Same visibility rules as the write path, minus the lock checks
        let (post, category) = self
            .ctx
            .post_repo()
            .find_with_category(&post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;
        if !category.is_active {
            return Err(ServiceError::not_found("Post", post_id.to_string()));
        }

        let replies = self.ctx.reply_repo().find_by_post(&post.id).await?;

        let mut author_ids: Vec<EntityId> = replies.iter().map(|r| r.user_id.clone()).collect();
        author_ids.sort();
        author_ids.dedup();
        let authors: HashMap<EntityId, User> = self
            .ctx
            .user_repo()
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id.clone(), u))
            .collect();

        Ok(build_reply_tree(&replies, &authors))
    }

    /// Resolve a post that accepts new replies: it must exist, its category
    /// must be active (inactive collapses to NotFound so the category's
    /// existence does not leak), and neither post nor category may be locked.
    async fn resolve_open_post(&self, post_id: &EntityId) -> ServiceResult<(Post, Category)> {
        let (post, category) = self
            .ctx
            .post_repo()
            .find_with_category(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        if !category.is_active {
            return Err(ServiceError::not_found("Post", post_id.to_string()));
        }
        if post.is_locked {
            return Err(DomainError::PostLocked(post.id.clone()).into());
        }
        if category.is_locked {
            return Err(DomainError::CategoryLocked(category.slug.clone()).into());
        }

        Ok((post, category))
    }

    /// Resolve a parent reply scoped to the post. A malformed id is a
    /// validation error; a parent in another post, or a deleted one, is
    /// uniformly NotFound.
    async fn resolve_parent(&self, raw: &str, post_id: &EntityId) -> ServiceResult<Reply> {
        let parent_id = EntityId::parse(raw)
            .map_err(|_| ServiceError::validation("Invalid parentReplyId format"))?;

        self.ctx
            .reply_repo()
            .find_in_post(&parent_id, post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Parent reply", raw.to_string()))
    }

    /// Walk the ancestor chain starting at `parent`, counting one hop per
    /// ancestor visited (the parent itself included). The walk ends at a
    /// thread root, at an unresolvable ancestor, or at the hop cap.
    async fn chain_depth(&self, parent: &Reply, post_id: &EntityId) -> ServiceResult<usize> {
        let mut depth = 1;
        let mut next = parent.parent_reply_id.clone();

        while let Some(ancestor_id) = next {
            if depth >= MAX_ANCESTOR_HOPS {
                break;
            }
            match self
                .ctx
                .reply_repo()
                .find_in_post(&ancestor_id, post_id)
                .await?
            {
                Some(ancestor) => {
                    depth += 1;
                    next = ancestor.parent_reply_id;
                }
                None => break,
            }
        }

        Ok(depth)
    }
}

/// Assemble the flat reply list into a forest. Children stay in input order
/// (oldest first); branches deeper than the write-side limit, and children of
/// unresolvable parents, are dropped.
fn build_reply_tree(
    replies: &[Reply],
    authors: &HashMap<EntityId, User>,
) -> Vec<ReplyTreeResponse> {
    let mut children: HashMap<&EntityId, Vec<&Reply>> = HashMap::new();
    let mut roots: Vec<&Reply> = Vec::new();

    for reply in replies {
        match &reply.parent_reply_id {
            Some(parent_id) => children.entry(parent_id).or_default().push(reply),
            None => roots.push(reply),
        }
    }

    roots
        .into_iter()
        .map(|root| build_node(root, &children, authors, 1))
        .collect()
}

fn build_node(
    reply: &Reply,
    children: &HashMap<&EntityId, Vec<&Reply>>,
    authors: &HashMap<EntityId, User>,
    depth: usize,
) -> ReplyTreeResponse {
    let nested = if depth >= MAX_ANCESTOR_HOPS {
        Vec::new()
    } else {
        children
            .get(&reply.id)
            .map(|list| {
                list.iter()
                    .map(|child| build_node(child, children, authors, depth + 1))
                    .collect()
            })
            .unwrap_or_default()
    };

    ReplyTreeResponse {
        reply: ReplyResponse::from_parts(reply, authors.get(&reply.user_id)),
        replies: nested,
    }
}
