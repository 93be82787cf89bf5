use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostSlug,
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    /// Drafts are returned too; only soft-deleted posts are hidden.
    pub async fn get_post_by_slug(&self, query: GetPostBySlugQuery) -> ApplicationResult<PostDto> {
        // A string that could never be a slug simply matches nothing.
        let Ok(slug) = PostSlug::new(query.slug) else {
            return Err(ApplicationError::not_found("post not found"));
        };

        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        Ok(post.into())
    }
}
