use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate, PostWithAuthor};
use crate::domain::post::value_objects::{PostId, PostSlug};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Every method ignores soft-deleted posts.
#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the slug is already held by a live post.
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn soft_delete(&self, id: PostId, deleted_at: DateTime<Utc>) -> DomainResult<()>;
}

/// Every method ignores soft-deleted posts.
#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<PostWithAuthor>>;
    /// Published posts, newest first.
    async fn list_published(&self) -> DomainResult<Vec<PostWithAuthor>>;
    async fn count_by_slug(&self, slug: &str) -> DomainResult<u64>;
}
