use super::UserCommandService;
use crate::{
    application::{
        dto::UserSummaryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        user::{Email, NewUser, PasswordHash, Username},
    },
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Creates an author account. A taken email surfaces as
    /// `ApplicationError::Conflict`, detected from the failed insert.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserSummaryDto> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        self.password_policy.validate(&command.password)?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::author(username, email, password_hash, self.clock.now());
        let user = self.user_repo.insert(new_user).await.map_err(|err| match err {
            DomainError::Conflict(_) => ApplicationError::conflict("email is already registered"),
            other => other.into(),
        })?;

        tracing::info!(user_id = %user.id, "registered user");
        Ok(user.into())
    }
}
