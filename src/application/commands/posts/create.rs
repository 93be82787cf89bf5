// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        post::{HtmlContent, MarkdownContent, NewPost, PostTitle},
    },
};

/// How many times a slug is regenerated after losing an insert race.
pub const MAX_SLUG_ATTEMPTS: usize = 3;

pub struct CreatePostCommand {
    pub title: String,
    pub content_md: String,
    pub content_html: String,
    pub published: bool,
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content_md = MarkdownContent::new(command.content_md)?;
        let content_html = HtmlContent::new(command.content_html);

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let slug = self.slug_service.generate_unique_slug(&title).await?;
            let new_post = NewPost {
                title: title.clone(),
                slug: slug.clone(),
                content_md: content_md.clone(),
                content_html: content_html.clone(),
                published: command.published,
                author_id: actor.id,
                created_at: self.clock.now(),
            };

            match self.write_repo.insert(new_post).await {
                Ok(post) => {
                    tracing::info!(post_id = %post.id, slug = %post.slug, author_id = %actor.id, "created post");
                    return Ok(post.into());
                }
                Err(DomainError::Conflict(_)) => {
                    tracing::warn!(%slug, attempt, "slug taken concurrently, regenerating");
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(ApplicationError::conflict(format!(
            "could not assign a unique slug after {MAX_SLUG_ATTEMPTS} attempts"
        )))
    }
}
