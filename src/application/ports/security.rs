// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
};
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// `Ok(false)` on mismatch. Errors only when `expected_hash` is not a
    /// digest this hasher understands.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;

    /// Fails with `ApplicationError::InvalidToken` on a bad signature, a
    /// malformed token, or an expired one.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
