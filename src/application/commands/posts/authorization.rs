// src/application/commands/posts/authorization.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{Post, PostId, specifications::CanModifyPostSpec},
};

impl PostCommandService {
    /// Loads a live post and checks the actor may change it. Absence wins
    /// over ownership: a missing post is `NotFound` for everyone, and so is
    /// an id no post can ever have.
    pub(super) async fn load_modifiable(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        action: &str,
    ) -> ApplicationResult<Post> {
        let Ok(id) = PostId::new(id) else {
            return Err(ApplicationError::not_found("post not found"));
        };

        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !CanModifyPostSpec::new(&post, actor.id, actor.role).is_satisfied() {
            return Err(ApplicationError::forbidden(format!(
                "you are not allowed to {action} this post"
            )));
        }

        Ok(post)
    }
}
