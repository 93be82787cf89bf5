use crate::domain::user::{Role, User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of an account. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserSummaryDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserSummaryDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.into(),
            email: user.email.into(),
            role: user.role,
        }
    }
}
