// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand},
    dto::{UserSummaryDto, serde_time},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Bearer token for the `Authorization` header.
    pub token: String,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
    pub user: UserSummaryDto,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created.", body = UserSummaryDto),
        (status = 400, description = "Invalid username, email or password.", body = ErrorResponse),
        (status = 409, description = "Email already registered.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<UserSummaryDto>)> {
    let command = RegisterUserCommand {
        username: payload.username,
        email: payload.email,
        password: payload.password,
    };

    let user = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted.", body = LoginResponse),
        (status = 400, description = "Malformed request.", body = ErrorResponse),
        (status = 401, description = "Unknown email or wrong password.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let command = LoginUserCommand {
        email: payload.email,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        token: result.token.token,
        expires_at: result.token.expires_at,
        expires_in: result.token.expires_in,
        user: result.user,
    }))
}
