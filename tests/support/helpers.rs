// tests/support/helpers.rs
use std::{sync::Arc, time::Duration};

use apipress::application::{
    commands::{
        posts::PostCommandService,
        users::{PasswordPolicy, UserCommandService},
    },
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    queries::posts::PostQueryService,
    services::ApplicationServices,
};
use apipress::domain::post::{PostReadRepository, PostWriteRepository, services::PostSlugService};
use apipress::domain::user::UserRepository;
use apipress::infrastructure::{
    database,
    repositories::{SqlitePostReadRepository, SqlitePostWriteRepository, SqliteUserRepository},
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
};
use apipress::presentation::http::{routes::build_router, state::HttpState};
use argon2::Params;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, Response, StatusCode, header},
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use super::mocks::{
    InMemoryPostStore, InMemoryUserRepo, StaticTokenManager, SteppingClock, StrictPasswordHasher,
};

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/* ---------------------------- Application-level fixtures ---------------------------- */

/// Services wired over in-memory mocks, with handles kept for assertions.
pub struct MockedServices {
    pub users: Arc<InMemoryUserRepo>,
    pub posts: Arc<InMemoryPostStore>,
    pub user_commands: UserCommandService,
    pub post_commands: PostCommandService,
    pub post_queries: PostQueryService,
}

pub fn mocked_services() -> MockedServices {
    let users = Arc::new(InMemoryUserRepo::default());
    let posts = Arc::new(InMemoryPostStore::new(Arc::clone(&users)));
    post_services_over(users, Arc::clone(&posts) as Arc<dyn PostWriteRepository>, posts)
}

/// Same wiring but with a custom write side, e.g. one that loses races.
pub fn post_services_over(
    users: Arc<InMemoryUserRepo>,
    write_repo: Arc<dyn PostWriteRepository>,
    posts: Arc<InMemoryPostStore>,
) -> MockedServices {
    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::default());
    let read_repo: Arc<dyn PostReadRepository> = Arc::clone(&posts) as Arc<dyn PostReadRepository>;

    let user_commands = UserCommandService::new(
        Arc::clone(&users) as Arc<dyn UserRepository>,
        Arc::new(StrictPasswordHasher),
        Arc::new(StaticTokenManager),
        Arc::clone(&clock),
    );
    let post_commands = PostCommandService::new(
        write_repo,
        Arc::clone(&read_repo),
        Arc::new(PostSlugService::new(Arc::clone(&read_repo))),
        Arc::clone(&clock),
    );
    let post_queries = PostQueryService::new(read_repo);

    MockedServices {
        users,
        posts,
        user_commands,
        post_commands,
        post_queries,
    }
}

/* ---------------------------- HTTP-level fixtures ---------------------------- */

/// Full router over an in-memory SQLite database and real security adapters.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub hasher: Arc<dyn PasswordHasher>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let pool = database::init_pool("sqlite::memory:")
            .await
            .expect("in-memory pool");
        database::run_migrations(&pool).await.expect("migrations");

        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::with_params(
            Params::new(8, 1, 1, None).expect("argon2 params"),
        ));
        let tokens: Arc<dyn TokenManager> = Arc::new(
            BiscuitTokenManager::new(TEST_SECRET, Duration::from_secs(3600), Arc::clone(&clock))
                .expect("token manager"),
        );

        let services = Arc::new(ApplicationServices::new(
            Arc::new(SqliteUserRepository::new(pool.clone())),
            Arc::new(SqlitePostWriteRepository::new(pool.clone())),
            Arc::new(SqlitePostReadRepository::new(pool.clone())),
            Arc::clone(&hasher),
            tokens,
            clock,
            PasswordPolicy::default(),
        ));

        let router = build_router(HttpState { services }, &["*".to_string()]);
        Self {
            router,
            pool,
            hasher,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    /// Registers and logs in, returning the bearer token.
    pub async fn register_and_login(&self, username: &str, email: &str) -> String {
        let resp = self
            .request(
                Method::POST,
                "/api/v1/auth/register",
                Some(serde_json::json!({
                    "username": username,
                    "email": email,
                    "password": "secret123",
                })),
                None,
            )
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        self.login(email, "secret123").await
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let resp = self
            .request(
                Method::POST,
                "/api/v1/auth/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        body["token"].as_str().expect("token in body").to_string()
    }
}

pub async fn json_body(resp: Response<Body>) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Asserts status and the machine-readable `error` kind.
pub async fn assert_error_response(resp: Response<Body>, status: StatusCode, kind: &str) -> Value {
    assert_eq!(resp.status(), status);
    let body = json_body(resp).await;
    assert_eq!(body["error"], kind, "unexpected error body: {body}");
    assert!(body["message"].is_string());
    body
}
