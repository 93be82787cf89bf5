use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::Email,
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the email is already taken.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    /// Matches case-insensitively.
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;
}
