use crate::application::error::{ApplicationError, ApplicationResult};

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Rules a password must satisfy at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl PasswordPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Length is counted in characters, not bytes.
    pub fn validate(&self, password: &str) -> ApplicationResult<()> {
        if password.chars().count() < self.min_length {
            return Err(ApplicationError::validation(format!(
                "password must be at least {} characters",
                self.min_length
            )));
        }
        Ok(())
    }
}
