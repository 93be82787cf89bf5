// tests/support/mocks/user_repo.rs
use std::sync::Mutex;

use apipress::domain::errors::{DomainError, DomainResult};
use apipress::domain::user::{Email, NewUser, User, UserId, UserRepository, Username};
use async_trait::async_trait;

/// Enforces case-insensitive email uniqueness like the real store.
#[derive(Debug, Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn username_of(&self, id: UserId) -> Option<Username> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.username.clone())
    }

    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let taken = users
            .iter()
            .any(|u| u.email.as_str().eq_ignore_ascii_case(new_user.email.as_str()));
        if taken {
            return Err(DomainError::Conflict("email already exists".into()));
        }

        let user = User {
            id: UserId::new(users.len() as i64 + 1)?,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.as_str().eq_ignore_ascii_case(email.as_str()))
            .cloned())
    }
}
