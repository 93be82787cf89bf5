use crate::domain::post::{AuthorSummary, Post, PostWithAuthor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: i64,
    pub username: String,
}

impl From<AuthorSummary> for AuthorDto {
    fn from(author: AuthorSummary) -> Self {
        Self {
            id: author.id.into(),
            username: author.username.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content_md: String,
    pub content_html: String,
    pub published: bool,
    pub author_id: i64,
    /// Present on public reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into(),
            slug: post.slug.into(),
            content_md: post.content_md.into(),
            content_html: post.content_html.into(),
            published: post.published,
            author_id: post.author_id.into(),
            author: None,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<PostWithAuthor> for PostDto {
    fn from(value: PostWithAuthor) -> Self {
        Self {
            author: Some(value.author.into()),
            ..Self::from(value.post)
        }
    }
}
