// tests/support/builders.rs
use apipress::application::{
    commands::{
        posts::{CreatePostCommand, UpdatePostCommand},
        users::{LoginUserCommand, RegisterUserCommand},
    },
    dto::AuthenticatedUser,
};
use apipress::domain::user::{Role, UserId};
use chrono::Duration;

use super::mocks::fixed_now;

pub fn actor(id: i64, role: Role) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        email: format!("user{id}@example.com"),
        role,
        issued_at: fixed_now(),
        expires_at: fixed_now() + Duration::hours(1),
    }
}

pub fn register_cmd(username: &str, email: &str, password: &str) -> RegisterUserCommand {
    RegisterUserCommand {
        username: username.into(),
        email: email.into(),
        password: password.into(),
    }
}

pub fn login_cmd(email: &str, password: &str) -> LoginUserCommand {
    LoginUserCommand {
        email: email.into(),
        password: password.into(),
    }
}

pub fn create_cmd(title: &str) -> CreatePostCommand {
    CreatePostCommand {
        title: title.into(),
        content_md: format!("# {title}"),
        content_html: String::new(),
        published: false,
    }
}

pub fn published_cmd(title: &str) -> CreatePostCommand {
    CreatePostCommand {
        published: true,
        ..create_cmd(title)
    }
}

pub fn update_cmd(id: i64) -> UpdatePostCommand {
    UpdatePostCommand {
        id,
        ..UpdatePostCommand::default()
    }
}
