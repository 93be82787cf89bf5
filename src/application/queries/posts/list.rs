use super::PostQueryService;
use crate::application::{dto::PostDto, error::ApplicationResult};

impl PostQueryService {
    /// Published, live posts, newest first, each with its author attached.
    pub async fn list_published(&self) -> ApplicationResult<Vec<PostDto>> {
        let posts = self.read_repo.list_published().await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }
}
