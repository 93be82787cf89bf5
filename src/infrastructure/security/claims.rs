// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};

/// Rebuilds the identity from the facts of an authorized token.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts)?;
    build_authenticated_user(ctx)
}

fn build_authenticated_user(ctx: ClaimsContext) -> ApplicationResult<AuthenticatedUser> {
    let missing = |claim: &str| ApplicationError::invalid_token(format!("missing {claim} claim"));

    let user_id = ctx.user_id.ok_or_else(|| missing("user"))?;
    let id = UserId::new(user_id).map_err(|_| ApplicationError::invalid_token("bad user id"))?;

    Ok(AuthenticatedUser {
        id,
        email: ctx.email.ok_or_else(|| missing("user"))?,
        role: ctx.role.ok_or_else(|| missing("role"))?,
        issued_at: ctx.issued_at.ok_or_else(|| missing("issued_at"))?,
        expires_at: ctx.expires_at.ok_or_else(|| missing("expires_at"))?,
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    email: Option<String>,
    role: Option<Role>,
    issued_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> ApplicationResult<Self> {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply_predicate(&fact.predicate)?;
        }
        Ok(ctx)
    }

    /// Each claim may appear once; a second value means the token was tampered with.
    fn apply_predicate(&mut self, predicate: &Predicate) -> ApplicationResult<()> {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(email)]) => {
                set_once(&mut self.user_id, *id, "user")?;
                set_once(&mut self.email, email.clone(), "user")
            }
            ("role", [Term::Str(role)]) => {
                let role = role
                    .parse()
                    .map_err(|_| ApplicationError::invalid_token("unknown role claim"))?;
                set_once(&mut self.role, role, "role")
            }
            ("issued_at", [Term::Date(seconds)]) => {
                let at = date(*seconds).ok_or_else(|| bad_date("issued_at"))?;
                set_once(&mut self.issued_at, at, "issued_at")
            }
            ("expires_at", [Term::Date(seconds)]) => {
                let at = date(*seconds).ok_or_else(|| bad_date("expires_at"))?;
                set_once(&mut self.expires_at, at, "expires_at")
            }
            _ => Ok(()),
        }
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, claim: &str) -> ApplicationResult<()> {
    if slot.is_some() {
        return Err(ApplicationError::invalid_token(format!(
            "duplicate {claim} claim"
        )));
    }
    *slot = Some(value);
    Ok(())
}

fn bad_date(claim: &str) -> ApplicationError {
    ApplicationError::invalid_token(format!("{claim} claim is out of range"))
}

fn date(seconds: u64) -> Option<DateTime<Utc>> {
    i64::try_from(seconds)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}
