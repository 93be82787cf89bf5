// src/infrastructure/repositories/sqlite_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    AuthorSummary, HtmlContent, MarkdownContent, NewPost, Post, PostId, PostReadRepository,
    PostSlug, PostTitle, PostUpdate, PostWithAuthor, PostWriteRepository,
};
use crate::domain::user::{UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

const POST_COLUMNS: &str =
    "id, title, slug, content_md, content_html, published, author_id, created_at, updated_at";

const POST_WITH_AUTHOR_SELECT: &str = "SELECT p.id, p.title, p.slug, p.content_md, p.content_html, \
     p.published, p.author_id, p.created_at, p.updated_at, u.username AS author_username \
     FROM posts p JOIN users u ON u.id = p.author_id";

#[derive(Clone)]
pub struct SqlitePostWriteRepository {
    pool: SqlitePool,
}

impl SqlitePostWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqlitePostReadRepository {
    pool: SqlitePool,
}

impl SqlitePostReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    content_md: String,
    content_html: String,
    published: bool,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: PostSlug::new(row.slug)?,
            content_md: MarkdownContent::new(row.content_md)?,
            content_html: HtmlContent::new(row.content_html),
            published: row.published,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct PostWithAuthorRow {
    #[sqlx(flatten)]
    post: PostRow,
    author_username: String,
}

impl TryFrom<PostWithAuthorRow> for PostWithAuthor {
    type Error = DomainError;

    fn try_from(row: PostWithAuthorRow) -> Result<Self, Self::Error> {
        let post = Post::try_from(row.post)?;
        let author = AuthorSummary {
            id: post.author_id,
            username: Username::new(row.author_username)?,
        };
        Ok(PostWithAuthor { post, author })
    }
}

#[async_trait]
impl PostWriteRepository for SqlitePostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            content_md,
            content_html,
            published,
            author_id,
            created_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (title, slug, content_md, content_html, published, author_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content_md.as_str())
        .bind(content_html.as_str())
        .bind(published)
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            content_md,
            content_html,
            published,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "UPDATE posts SET
                title = COALESCE(?, title),
                content_md = COALESCE(?, content_md),
                content_html = COALESCE(?, content_html),
                published = COALESCE(?, published),
                updated_at = ?
             WHERE id = ? AND deleted_at IS NULL
             RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_ref().map(PostTitle::as_str))
        .bind(content_md.as_ref().map(MarkdownContent::as_str))
        .bind(content_html.as_ref().map(HtmlContent::as_str))
        .bind(published)
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        Post::try_from(row)
    }

    async fn soft_delete(&self, id: PostId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let result =
            sqlx::query("UPDATE posts SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL")
                .bind(deleted_at)
                .bind(i64::from(id))
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for SqlitePostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = ? AND deleted_at IS NULL"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<PostWithAuthor>> {
        let row = sqlx::query_as::<_, PostWithAuthorRow>(&format!(
            "{POST_WITH_AUTHOR_SELECT} WHERE p.slug = ? AND p.deleted_at IS NULL"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(PostWithAuthor::try_from).transpose()
    }

    async fn list_published(&self) -> DomainResult<Vec<PostWithAuthor>> {
        let rows = sqlx::query_as::<_, PostWithAuthorRow>(&format!(
            "{POST_WITH_AUTHOR_SELECT}
             WHERE p.published = 1 AND p.deleted_at IS NULL
             ORDER BY p.created_at DESC, p.id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(PostWithAuthor::try_from).collect()
    }

    async fn count_by_slug(&self, slug: &str) -> DomainResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM posts WHERE slug = ? AND deleted_at IS NULL",
        )
        .bind(slug)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
