// src/domain/post/services/mod.rs
use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::slug::make_unique_slug;
use crate::domain::post::value_objects::{PostSlug, PostTitle};

/// Upper bound on the numeric suffix tried before giving up.
pub const DEFAULT_MAX_SLUG_SUFFIX: u64 = 10_000;

/// Domain service responsible for producing unique slugs for posts.
pub struct PostSlugService {
    read_repo: Arc<dyn PostReadRepository>,
}

impl PostSlugService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn generate_unique_slug(&self, title: &PostTitle) -> DomainResult<PostSlug> {
        make_unique_slug(title.as_str(), Some(DEFAULT_MAX_SLUG_SUFFIX), |candidate| {
            let repo = Arc::clone(&self.read_repo);
            async move { Ok(repo.count_by_slug(&candidate).await? > 0) }
        })
        .await
    }
}
