use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const INTERNAL_MESSAGE: &str = "an internal error occurred";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let message = err.to_string();
        match err {
            ApplicationError::Validation(_) => {
                Self::new(StatusCode::BAD_REQUEST, "validation_error", message)
            }
            ApplicationError::Conflict(_) => Self::new(StatusCode::CONFLICT, "conflict", message),
            ApplicationError::InvalidCredentials => {
                Self::new(StatusCode::UNAUTHORIZED, "invalid_credentials", message)
            }
            ApplicationError::InvalidToken(_) => {
                Self::new(StatusCode::UNAUTHORIZED, "invalid_token", message)
            }
            ApplicationError::Forbidden(_) => Self::new(StatusCode::FORBIDDEN, "forbidden", message),
            ApplicationError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "not_found", message),
            ApplicationError::Hashing(_)
            | ApplicationError::Signing(_)
            | ApplicationError::Infrastructure(_) => {
                tracing::error!(error = %message, "request failed with an internal error");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        }
    }

    fn new(status: StatusCode, kind: &'static str, message: String) -> Self {
        Self {
            status,
            kind,
            message,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self.kind.to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable machine-readable kind, e.g. `not_found`.
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
