// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod post_repos;
pub mod security;
pub mod time;
pub mod user_repo;

pub use post_repos::InMemoryPostStore;
pub use security::{StaticTokenManager, StrictPasswordHasher, CORRUPT_DIGEST};
pub use time::{FixedClock, SteppingClock, fixed_now};
pub use user_repo::InMemoryUserRepo;
