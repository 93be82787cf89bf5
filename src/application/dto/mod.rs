pub mod auth;
pub mod posts;
pub mod serde_time;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use posts::{AuthorDto, PostDto};
pub use users::UserSummaryDto;
