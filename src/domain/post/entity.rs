// src/domain/post/entity.rs
use crate::domain::post::value_objects::{
    HtmlContent, MarkdownContent, PostId, PostSlug, PostTitle,
};
use crate::domain::user::{UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content_md: MarkdownContent,
    pub content_html: HtmlContent,
    pub published: bool,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

/// Minimal author projection attached to public reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSummary {
    pub id: UserId,
    pub username: Username,
}

#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: AuthorSummary,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content_md: MarkdownContent,
    pub content_html: HtmlContent,
    pub published: bool,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub content_md: Option<MarkdownContent>,
    pub content_html: Option<HtmlContent>,
    pub published: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content_md: None,
            content_html: None,
            published: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content_md(mut self, content_md: MarkdownContent) -> Self {
        self.content_md = Some(content_md);
        self
    }

    pub fn with_content_html(mut self, content_html: HtmlContent) -> Self {
        self.content_html = Some(content_html);
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        let now = Utc::now();
        Post {
            id: PostId::new(1).unwrap(),
            title: PostTitle::new("Foo").unwrap(),
            slug: PostSlug::new("foo").unwrap(),
            content_md: MarkdownContent::new("# Foo").unwrap(),
            content_html: HtmlContent::new("<h1>Foo</h1>"),
            published: false,
            author_id: UserId::new(1).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn authorship_compares_ids() {
        let post = sample_post();
        assert!(post.is_authored_by(UserId::new(1).unwrap()));
        assert!(!post.is_authored_by(UserId::new(2).unwrap()));
    }
}
