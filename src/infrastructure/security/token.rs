// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenManager, time::Clock},
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::Duration as ChronoDuration;
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Context string for deriving the signing key from the configured secret.
const KEY_DERIVATION_CONTEXT: &str = "apipress 2024-01-01 token signing key";

/// Shortest secret accepted for key derivation, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Issues and verifies Ed25519-signed biscuit tokens. The key pair is
/// derived once from a secret and never rotated.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl BiscuitTokenManager {
    pub fn new(secret: &str, ttl: Duration, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(ApplicationError::signing(format!(
                "token secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }

        let derived = blake3::derive_key(KEY_DERIVATION_CONTEXT, secret.as_bytes());
        let private = PrivateKey::from_bytes_hex(
            blake3::Hash::from(derived).to_hex().as_str(),
            Algorithm::Ed25519,
        )
        .map_err(|err| ApplicationError::signing(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
            clock,
        })
    }
}

fn build_code_and_params(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> (&'static str, HashMap<String, Term>) {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("uid".to_string(), i64::from(subject.user_id).into());
    params.insert("email".to_string(), subject.email.as_str().into());
    params.insert("urole".to_string(), subject.role.as_str().into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());

    let code = r#"
        user({uid}, {email});
        role({urole});
        issued_at({issued});
        expires_at({exp});
        check if time($now), $now >= {issued};
        check if time($now), $now <= {exp};
    "#;

    (code, params)
}

fn build_and_serialize_biscuit(
    code: &str,
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> ApplicationResult<String> {
    let token = Biscuit::builder()
        .code_with_params(code, params, HashMap::new())
        .map_err(|err| ApplicationError::signing(err.to_string()))?
        .build(root)
        .map_err(|err| ApplicationError::signing(err.to_string()))?;

    token
        .to_base64()
        .map_err(|err| ApplicationError::signing(err.to_string()))
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX)
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = self.clock.now();
        let ttl = ChronoDuration::from_std(self.ttl)
            .map_err(|_| ApplicationError::signing("token ttl out of range"))?;
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| ApplicationError::signing("token expiration overflow"))?;

        let (code, params) = build_code_and_params(
            &subject,
            SystemTime::from(issued_at),
            SystemTime::from(expires_at),
        );
        let token = build_and_serialize_biscuit(code, params, self.root.as_ref())?;

        Ok(AuthTokenDto {
            token,
            issued_at,
            expires_at,
            expires_in: ttl_to_expires_in_seconds(self.ttl),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::invalid_token(err.to_string()))?;

        // Only the authority block is signed with the root key; any holder can
        // append further blocks, so their facts must never reach the claims.
        if biscuit.block_count() != 1 {
            return Err(ApplicationError::invalid_token(
                "token carries appended blocks",
            ));
        }

        // The embedded checks carry the validity window; the authorizer
        // supplies the current time and accepts anything that passes them.
        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if true")
            .map_err(|err| ApplicationError::invalid_token(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::invalid_token(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::invalid_token(err.to_string()))?;

        let (facts, _, _, _) = authorizer.dump();
        crate::infrastructure::security::claims::parse_claims(facts)
    }
}
