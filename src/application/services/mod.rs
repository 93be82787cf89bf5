// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            posts::PostCommandService,
            users::{PasswordPolicy, UserCommandService},
        },
        dto::AuthenticatedUser,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::posts::PostQueryService,
    },
    domain::{
        post::{PostReadRepository, PostWriteRepository, services::PostSlugService},
        user::UserRepository,
    },
};

/// Everything the delivery layer needs, wired once at startup.
pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        password_policy: PasswordPolicy,
    ) -> Self {
        let user_commands = Arc::new(
            UserCommandService::new(
                Arc::clone(&user_repo),
                Arc::clone(&password_hasher),
                Arc::clone(&token_manager),
                Arc::clone(&clock),
            )
            .with_password_policy(password_policy),
        );

        let slug_service = Arc::new(PostSlugService::new(Arc::clone(&post_read_repo)));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            slug_service,
            Arc::clone(&clock),
        ));

        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_read_repo)));

        Self {
            user_commands,
            post_commands,
            post_queries,
            token_manager,
        }
    }

    /// Verifies a raw bearer token and returns the identity it carries.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
