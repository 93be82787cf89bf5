// tests/support/mocks/security.rs
use apipress::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use apipress::domain::user::{Role, UserId};
use async_trait::async_trait;
use chrono::Duration;

/// Stored digests that no hasher can read.
pub const CORRUPT_DIGEST: &str = "corrupt";

const PREFIX: &str = "hashed:";

/* -------------------------------- PasswordHasher -------------------------------- */

/// Fast, deterministic hasher that still distinguishes passwords.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("{PREFIX}{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        match expected_hash.strip_prefix(PREFIX) {
            Some(stored) => Ok(stored == password),
            None => Err(ApplicationError::hashing("unreadable digest")),
        }
    }
}

/* -------------------------------- TokenManager -------------------------------- */

/// Issues `token:<id>:<role>:<email>` and accepts exactly that shape back.
#[derive(Clone, Debug, Default)]
pub struct StaticTokenManager;

#[async_trait]
impl TokenManager for StaticTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: format!(
                "token:{}:{}:{}",
                subject.user_id,
                subject.role,
                subject.email.as_str()
            ),
            issued_at,
            expires_at: issued_at + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let invalid = || ApplicationError::invalid_token("unrecognised token");
        let mut parts = token.splitn(4, ':');
        if parts.next() != Some("token") {
            return Err(invalid());
        }
        let id: i64 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let role: Role = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let email = parts.next().ok_or_else(invalid)?.to_string();
        let issued_at = super::time::fixed_now();

        Ok(AuthenticatedUser {
            id: UserId::new(id).map_err(|_| invalid())?,
            email,
            role,
            issued_at,
            expires_at: issued_at + Duration::hours(1),
        })
    }
}
