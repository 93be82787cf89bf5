// src/application/commands/posts/update.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
    },
    domain::post::{HtmlContent, MarkdownContent, PostTitle, PostUpdate},
};

/// Partial update. An empty string counts as "not provided".
#[derive(Debug, Default)]
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content_md: Option<String>,
    pub content_html: Option<String>,
    pub published: Option<bool>,
}

fn provided(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let post = self.load_modifiable(actor, command.id, "edit").await?;

        let mut update = PostUpdate::new(post.id, self.clock.now());
        if let Some(title) = provided(command.title) {
            update = update.with_title(PostTitle::new(title)?);
        }
        if let Some(content_md) = provided(command.content_md) {
            update = update.with_content_md(MarkdownContent::new(content_md)?);
        }
        if let Some(content_html) = provided(command.content_html) {
            update = update.with_content_html(HtmlContent::new(content_html));
        }
        if let Some(published) = command.published {
            update = update.with_published(published);
        }

        let post = self.write_repo.update(update).await?;
        tracing::info!(post_id = %post.id, actor_id = %actor.id, "updated post");
        Ok(post.into())
    }
}
