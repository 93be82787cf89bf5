// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::PostDto,
    queries::posts::GetPostBySlugQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody, PathParam};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: String,
    pub content_md: String,
    /// Pre-rendered HTML; stored as given.
    #[serde(default)]
    pub content_html: String,
    #[serde(default)]
    pub published: bool,
}

/// Absent fields, and empty strings, leave the stored value untouched.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content_md: Option<String>,
    #[serde(default)]
    pub content_html: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    responses(
        (status = 200, description = "Published posts, newest first.", body = [PostDto])
    ),
    security(()),
    tag = "Posts"
)]
pub async fn list_posts(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<PostDto>>> {
    state
        .services
        .post_queries
        .list_published()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/by-slug/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "The post, drafts included.", body = PostDto),
        (status = 404, description = "No live post has this slug.", body = ErrorResponse)
    ),
    security(()),
    tag = "Posts"
)]
pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    PathParam(slug): PathParam<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created with a fresh slug.", body = PostDto),
        (status = 400, description = "Empty title or content.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 409, description = "No slug could be assigned.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        content_md: payload.content_md,
        content_html: payload.content_html,
        published: payload.published,
    };

    let post = state
        .services
        .post_commands
        .create_post(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated; the slug never changes.", body = PostDto),
        (status = 400, description = "Malformed id or body.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Not the author and not an admin.", body = ErrorResponse),
        (status = 404, description = "Post missing or deleted.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        content_md: payload.content_md,
        content_html: payload.content_html,
        published: payload.published,
    };

    state
        .services
        .post_commands
        .update_post(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post soft-deleted.", body = MessageResponse),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Not the author and not an admin.", body = ErrorResponse),
        (status = 404, description = "Post missing or already deleted.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .post_commands
        .delete_post(&user, DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(MessageResponse {
        message: "post deleted".into(),
    }))
}
