// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::request::Parts,
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// Identity of the bearer-token holder. Requests without a valid token are
/// rejected with 401 before the handler runs.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = parts
            .extensions
            .get::<HttpState>()
            .cloned()
            .ok_or_else(|| ApplicationError::infrastructure("application state missing"))?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| ApplicationError::invalid_token("missing bearer token"))?;

        let user = app_state.services.authenticate(header.token()).await?;
        Ok(Self(user))
    }
}

/// `Json` whose rejections use the regular error body.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection(&rejection).into()),
        }
    }
}

fn json_rejection(rejection: &JsonRejection) -> ApplicationError {
    ApplicationError::validation(rejection.body_text())
}

/// `Path` whose rejections (e.g. a non-numeric id) use the regular error body.
#[derive(Debug, Clone)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(path_rejection(&rejection).into()),
        }
    }
}

fn path_rejection(rejection: &PathRejection) -> ApplicationError {
    ApplicationError::validation(rejection.body_text())
}
