use apipress::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use apipress::config::AppConfig;
use apipress::domain::{
    post::{PostReadRepository, PostWriteRepository},
    user::UserRepository,
};
use apipress::infrastructure::{
    database,
    repositories::{SqlitePostReadRepository, SqlitePostWriteRepository, SqliteUserRepository},
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
};
use apipress::presentation::http::{routes::build_router, state::HttpState};
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url())
        .await
        .with_context(|| format!("opening database {}", config.database_url()))?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
    let post_write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(SqlitePostWriteRepository::new(pool.clone()));
    let post_read_repo: Arc<dyn PostReadRepository> =
        Arc::new(SqlitePostReadRepository::new(pool.clone()));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.token_secret(),
        config.token_ttl(),
        Arc::clone(&clock),
    )?);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        post_write_repo,
        post_read_repo,
        password_hasher,
        token_manager,
        clock,
        config.password_policy(),
    ));

    let app = build_router(HttpState { services }, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("binding {}", config.listen_addr()))?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
