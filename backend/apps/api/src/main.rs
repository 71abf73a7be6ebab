//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use std::sync::Arc;

use auth::application::BootstrapAdminUseCase;
use auth::{PgAuthRepository, auth_guard, auth_router, user_router};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http,
    http::{Method, header},
};
use catalog::{PgCatalogRepository, catalog_router};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,catalog=info,platform=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;
    if cfg!(debug_assertions) && config.access_token.secret.is_none() {
        tracing::warn!("JWT_SECRET not set, tokens will not survive a restart");
    }

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_config = Arc::new(config.auth_config()?);
    let catalog_config = Arc::new(config.catalog_config());
    let auth_repo = PgAuthRepository::new(pool.clone());

    // First admin on an empty database
    // Errors here should not prevent server startup
    if let Some(admin) = &config.bootstrap_admin {
        let bootstrap =
            BootstrapAdminUseCase::new(Arc::new(auth_repo.clone()), auth_config.clone());
        match bootstrap.execute(&admin.user_name, admin.password.clone()).await {
            Ok(true) => tracing::info!(user_name = %admin.user_name, "Bootstrap admin created"),
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Admin bootstrap failed, continuing anyway"
                );
            }
        }
    }

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let guard = auth_guard(auth_repo.clone(), auth_config.clone());
    let media_root = catalog_config.media.root().to_owned();

    let mut app = Router::new()
        .nest("/auth", auth_router(auth_repo.clone(), auth_config.clone()))
        .nest("/user", user_router(auth_repo, auth_config, guard.clone()))
        .merge(catalog_router(
            PgCatalogRepository::new(pool),
            catalog_config,
            guard,
        ))
        .fallback(|| async { AppError::new(ErrorKind::NotFound, "Route not found") });

    // Stored paths start with the media root, so files are served under it
    if let Some(mount) = media_mount(&media_root) {
        app = app.nest_service(&mount, ServeDir::new(&media_root));
    }

    let app = app
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// URL prefix for the media root, `None` when it is the working directory
fn media_mount(root: &str) -> Option<String> {
    let trimmed = root.trim_start_matches("./").trim_matches('/');
    (!trimmed.is_empty() && trimmed != ".").then(|| format!("/{trimmed}"))
}
