use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

/// Translates store failures into domain errors. Constraint violations keep
/// their meaning; anything else is an opaque persistence failure.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation => DomainError::Conflict(describe_unique(db_err.message())),
            ErrorKind::ForeignKeyViolation => {
                DomainError::NotFound("referenced record not found".into())
            }
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                DomainError::Validation(db_err.message().to_string())
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        _ => DomainError::Persistence(err.to_string()),
    }
}

// SQLite reports e.g. "UNIQUE constraint failed: users.email".
fn describe_unique(message: &str) -> String {
    if message.contains("users.email") {
        "email already exists".into()
    } else if message.contains("posts.slug") {
        "slug already exists".into()
    } else {
        "unique constraint violated".into()
    }
}
