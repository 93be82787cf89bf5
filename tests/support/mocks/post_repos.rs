// tests/support/mocks/post_repos.rs
use std::sync::{Arc, Mutex};

use apipress::domain::errors::{DomainError, DomainResult};
use apipress::domain::post::{
    AuthorSummary, NewPost, Post, PostId, PostReadRepository, PostSlug, PostUpdate,
    PostWithAuthor, PostWriteRepository,
};
use apipress::domain::user::Username;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::InMemoryUserRepo;

#[derive(Debug, Clone)]
struct StoredPost {
    post: Post,
    deleted_at: Option<DateTime<Utc>>,
}

/// One store behind both repository traits, so writes are visible to reads.
#[derive(Debug)]
pub struct InMemoryPostStore {
    posts: Mutex<Vec<StoredPost>>,
    users: Arc<InMemoryUserRepo>,
}

impl InMemoryPostStore {
    pub fn new(users: Arc<InMemoryUserRepo>) -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            users,
        }
    }

    /// Rows including soft-deleted ones, with their tombstones.
    pub fn raw(&self) -> Vec<(Post, Option<DateTime<Utc>>)> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .map(|s| (s.post.clone(), s.deleted_at))
            .collect()
    }

    fn with_author(&self, post: Post) -> DomainResult<PostWithAuthor> {
        let username = self
            .users
            .username_of(post.author_id)
            .unwrap_or_else(|| Username::new("unknown").unwrap());
        Ok(PostWithAuthor {
            author: AuthorSummary {
                id: post.author_id,
                username,
            },
            post,
        })
    }

    fn live(&self) -> Vec<Post> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.deleted_at.is_none())
            .map(|s| s.post.clone())
            .collect()
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostStore {
    async fn insert(&self, new_post: NewPost) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        let clash = posts
            .iter()
            .any(|s| s.deleted_at.is_none() && s.post.slug == new_post.slug);
        if clash {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let post = Post {
            id: PostId::new(posts.len() as i64 + 1)?,
            title: new_post.title,
            slug: new_post.slug,
            content_md: new_post.content_md,
            content_html: new_post.content_html,
            published: new_post.published,
            author_id: new_post.author_id,
            created_at: new_post.created_at,
            updated_at: new_post.created_at,
        };
        posts.push(StoredPost {
            post: post.clone(),
            deleted_at: None,
        });
        Ok(post)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        let stored = posts
            .iter_mut()
            .find(|s| s.deleted_at.is_none() && s.post.id == update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        let post = &mut stored.post;
        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(content_md) = update.content_md {
            post.content_md = content_md;
        }
        if let Some(content_html) = update.content_html {
            post.content_html = content_html;
        }
        if let Some(published) = update.published {
            post.published = published;
        }
        post.updated_at = update.updated_at;
        Ok(post.clone())
    }

    async fn soft_delete(&self, id: PostId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let mut posts = self.posts.lock().unwrap();
        let stored = posts
            .iter_mut()
            .find(|s| s.deleted_at.is_none() && s.post.id == id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        stored.deleted_at = Some(deleted_at);
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostStore {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.live().into_iter().find(|p| p.id == id))
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<PostWithAuthor>> {
        self.live()
            .into_iter()
            .find(|p| &p.slug == slug)
            .map(|p| self.with_author(p))
            .transpose()
    }

    async fn list_published(&self) -> DomainResult<Vec<PostWithAuthor>> {
        let mut posts: Vec<Post> = self.live().into_iter().filter(|p| p.published).collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        posts.into_iter().map(|p| self.with_author(p)).collect()
    }

    async fn count_by_slug(&self, slug: &str) -> DomainResult<u64> {
        Ok(self
            .live()
            .iter()
            .filter(|p| p.slug.as_str() == slug)
            .count() as u64)
    }
}

