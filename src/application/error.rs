// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Message shared by every failed login so callers cannot tell an unknown
/// email from a wrong password.
pub const INVALID_CREDENTIALS: &str = "invalid email or password";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("{INVALID_CREDENTIALS}")]
    InvalidCredentials,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("hashing failure: {0}")]
    Hashing(String),

    #[error("signing failure: {0}")]
    Signing(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::InvalidToken(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn hashing(msg: impl Into<String>) -> Self {
        Self::Hashing(msg.into())
    }

    pub fn signing(msg: impl Into<String>) -> Self {
        Self::Signing(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::Conflict(msg) => Self::Conflict(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            exhausted @ DomainError::SlugExhausted { .. } => Self::Conflict(exhausted.to_string()),
            DomainError::Persistence(msg) => Self::Infrastructure(msg),
        }
    }
}
