// src/application/commands/posts/mod.rs
mod authorization;
mod create;
mod delete;
mod service;
mod update;

pub use create::{CreatePostCommand, MAX_SLUG_ATTEMPTS};
pub use delete::DeletePostCommand;
pub use service::PostCommandService;
pub use update::UpdatePostCommand;
