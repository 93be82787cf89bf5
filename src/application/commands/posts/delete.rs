// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    /// Soft delete: the row stays, every read path stops seeing it.
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let post = self.load_modifiable(actor, command.id, "delete").await?;

        self.write_repo.soft_delete(post.id, self.clock.now()).await?;
        tracing::info!(post_id = %post.id, actor_id = %actor.id, "deleted post");
        Ok(())
    }
}
