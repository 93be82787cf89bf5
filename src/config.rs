// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

use crate::application::commands::users::{DEFAULT_MIN_PASSWORD_LENGTH, PasswordPolicy};
use crate::infrastructure::security::token::MIN_SECRET_LEN;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    token_secret: String,
    token_ttl: Duration,
    min_password_length: usize,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://storage/apipress.db".into()
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".into()
}

fn default_token_ttl() -> u64 {
    86_400
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".into()]
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);

        let listen_addr = match (lookup("LISTEN_ADDR"), lookup("PORT")) {
            (Some(addr), _) => addr,
            (None, Some(port)) => {
                let port: u16 = port
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid(format!("PORT must be a port number, got '{port}'")))?;
                format!("0.0.0.0:{port}")
            }
            (None, None) => default_listen_addr(),
        };

        let token_secret = lookup("TOKEN_SECRET").ok_or(ConfigError::Missing("TOKEN_SECRET"))?;
        if token_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid(format!(
                "TOKEN_SECRET must be at least {MIN_SECRET_LEN} bytes"
            )));
        }

        let token_ttl_secs = match lookup("TOKEN_TTL_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid("TOKEN_TTL_SECONDS must be a positive integer".into())
                })?,
            None => default_token_ttl(),
        };

        let min_password_length = match lookup("MIN_PASSWORD_LENGTH") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                ConfigError::Invalid("MIN_PASSWORD_LENGTH must be a non-negative integer".into())
            })?,
            None => DEFAULT_MIN_PASSWORD_LENGTH,
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            database_url,
            listen_addr,
            token_secret,
            token_ttl: Duration::from_secs(token_ttl_secs),
            min_password_length,
            allowed_origins,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn token_secret(&self) -> &str {
        &self.token_secret
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy::new(self.min_password_length)
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
