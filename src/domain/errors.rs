// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("no free slug derived from '{base}' within {attempts} attempts")]
    SlugExhausted { base: String, attempts: u64 },
    #[error("persistence error: {0}")]
    Persistence(String),
}
