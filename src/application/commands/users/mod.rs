mod login;
mod password;
mod register;
mod service;

pub use login::{LoginResult, LoginUserCommand};
pub use password::{DEFAULT_MIN_PASSWORD_LENGTH, PasswordPolicy};
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
