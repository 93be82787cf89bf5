use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserSummaryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserSummaryDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let email = Email::new(command.email)?;
        if command.password.is_empty() {
            return Err(ApplicationError::validation("password is required"));
        }

        let user = self
            .find_and_authenticate_user(&email, &command.password)
            .await?;

        let token = self.token_manager.issue(TokenSubject::from(&user)).await?;

        tracing::info!(user_id = %user.id, "user logged in");
        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    /// Unknown email and wrong password fail identically.
    async fn find_and_authenticate_user(
        &self,
        email: &Email,
        password: &str,
    ) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(ApplicationError::InvalidCredentials)?;

        if !self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await?
        {
            return Err(ApplicationError::InvalidCredentials);
        }

        Ok(user)
    }
}
