use std::sync::Arc;

use super::PasswordPolicy;
use crate::application::ports::{
    security::{PasswordHasher, TokenManager},
    time::Clock,
};
use crate::domain::user::UserRepository;

/// Registration and login.
pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) password_policy: PasswordPolicy,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            clock,
            password_policy: PasswordPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_password_policy(mut self, policy: PasswordPolicy) -> Self {
        self.password_policy = policy;
        self
    }
}
