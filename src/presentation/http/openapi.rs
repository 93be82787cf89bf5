// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::get_post_by_slug,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::delete_post,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::posts::CreatePostRequest,
            crate::presentation::http::controllers::posts::UpdatePostRequest,
            crate::presentation::http::controllers::posts::MessageResponse,
            crate::application::dto::UserSummaryDto,
            crate::application::dto::PostDto,
            crate::application::dto::AuthorDto,
            crate::domain::user::Role
        )
    ),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Posts", description = "Blog posts"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "apipress API",
        description = "Minimal blogging backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

/// Swagger UI at `/docs`, backed by the document at `/openapi.json`.
pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}
