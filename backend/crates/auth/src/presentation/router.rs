//! Auth Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::AuthenticateUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::{AccountRepository, CredentialRepository, ProfileRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthGuard, RoleGuard, require_auth, require_roles};

/// Build the bearer-token guard backed by `repo`.
///
/// Other routers (the catalog) take a clone of this to protect their
/// admin routes.
pub fn auth_guard<R>(repo: R, config: Arc<AuthConfig>) -> AuthGuard
where
    R: CredentialRepository + ProfileRepository + Send + Sync + 'static,
{
    let repo = Arc::new(repo);
    AuthGuard::new(Arc::new(AuthenticateUseCase::new(
        repo.clone(),
        repo,
        config,
    )))
}

/// Create the `/auth` router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic `/auth` router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: CredentialRepository + ProfileRepository + AccountRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route("/login", post(handlers::login::<R>))
        .route("/refresh", post(handlers::refresh::<R>))
        .with_state(state)
}

/// Create the `/user` router with PostgreSQL repository
pub fn user_router(repo: PgAuthRepository, config: Arc<AuthConfig>, guard: AuthGuard) -> Router {
    user_router_generic(repo, config, guard)
}

/// Create a generic `/user` router for any repository implementation
pub fn user_router_generic<R>(repo: R, config: Arc<AuthConfig>, guard: AuthGuard) -> Router
where
    R: CredentialRepository + ProfileRepository + AccountRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
    };

    let admin = Router::new()
        .route(
            "/",
            post(handlers::create_user::<R>).get(handlers::list_users::<R>),
        )
        .route("/{user_name}", put(handlers::update_user::<R>))
        .route("/get-info/{user_name}", get(handlers::get_user::<R>))
        .route_layer(from_fn_with_state(RoleGuard::admin(), require_roles));

    let authenticated = Router::new().route("/get-info", get(handlers::current_user::<R>));

    admin
        .merge(authenticated)
        .route_layer(from_fn_with_state(guard, require_auth))
        .with_state(state)
}
