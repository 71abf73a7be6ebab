//! Catalog Routers
//!
//! Reads are public. Writes sit behind the bearer-token guard and the
//! admin allow-list, except the option `rise` counter which anonymous
//! visitors hit.

use std::sync::Arc;

use auth::{AuthGuard, RoleGuard, require_auth, require_roles};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};

use crate::application::config::CatalogConfig;
use crate::domain::entity::sample_asset::SampleKind;
use crate::domain::repository::CatalogRepository;
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{
    CatalogAppState, SampleAppState, banner, cake_face, cake_face_option, category,
    sample_asset, setting,
};

/// Mount every catalog resource with PostgreSQL repository
pub fn catalog_router(
    repo: PgCatalogRepository,
    config: Arc<CatalogConfig>,
    guard: AuthGuard,
) -> Router {
    catalog_router_generic(repo, config, guard)
}

/// Mount every catalog resource for any repository implementation
pub fn catalog_router_generic<R>(repo: R, config: Arc<CatalogConfig>, guard: AuthGuard) -> Router
where
    R: CatalogRepository,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .nest(
            "/cake-face-category",
            category_router(state.clone(), guard.clone()),
        )
        .nest("/cake-face", cake_face_router(state.clone(), guard.clone()))
        .nest(
            "/cake-face-option",
            cake_face_option_router(state.clone(), guard.clone()),
        )
        .nest("/banners", banner_router(state.clone(), guard.clone()))
        .nest(
            "/sample-background",
            sample_router(state.clone(), SampleKind::Background, guard.clone()),
        )
        .nest(
            "/sample-pattern",
            sample_router(state.clone(), SampleKind::Pattern, guard.clone()),
        )
        .nest("/settings", setting_router(state, guard))
}

/// Wrap `routes` in authenticate → admin-only, innermost last
fn admin_only<S>(routes: Router<S>, guard: AuthGuard) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    routes
        .route_layer(from_fn_with_state(RoleGuard::admin(), require_roles))
        .route_layer(from_fn_with_state(guard, require_auth))
}

pub fn category_router<R>(state: CatalogAppState<R>, guard: AuthGuard) -> Router
where
    R: CatalogRepository,
{
    let admin = Router::new()
        .route("/", post(category::create::<R>))
        .route(
            "/{id}",
            put(category::update::<R>).delete(category::delete::<R>),
        );

    let public = Router::new()
        .route("/", get(category::list::<R>))
        .route("/{id}", get(category::get::<R>));

    admin_only(admin, guard).merge(public).with_state(state)
}

pub fn cake_face_router<R>(state: CatalogAppState<R>, guard: AuthGuard) -> Router
where
    R: CatalogRepository,
{
    let admin = Router::new()
        .route("/", post(cake_face::create::<R>))
        .route(
            "/{id}",
            put(cake_face::update::<R>).delete(cake_face::delete::<R>),
        );

    let public = Router::new()
        .route("/", get(cake_face::list::<R>))
        .route("/{id}", get(cake_face::get::<R>));

    admin_only(admin, guard).merge(public).with_state(state)
}

pub fn cake_face_option_router<R>(state: CatalogAppState<R>, guard: AuthGuard) -> Router
where
    R: CatalogRepository,
{
    let admin = Router::new()
        .route("/", post(cake_face_option::create::<R>))
        .route(
            "/{id}",
            put(cake_face_option::update::<R>).delete(cake_face_option::delete::<R>),
        );

    let public = Router::new()
        .route("/", get(cake_face_option::list::<R>))
        .route("/{id}", get(cake_face_option::get::<R>))
        .route("/{id}/rise", post(cake_face_option::rise::<R>));

    admin_only(admin, guard).merge(public).with_state(state)
}

pub fn banner_router<R>(state: CatalogAppState<R>, guard: AuthGuard) -> Router
where
    R: CatalogRepository,
{
    let admin = Router::new()
        .route("/", post(banner::create::<R>))
        .route(
            "/{id}",
            put(banner::reorder::<R>).delete(banner::delete::<R>),
        );

    let public = Router::new().route("/", get(banner::list::<R>));

    admin_only(admin, guard).merge(public).with_state(state)
}

pub fn sample_router<R>(state: CatalogAppState<R>, kind: SampleKind, guard: AuthGuard) -> Router
where
    R: CatalogRepository,
{
    let state = SampleAppState {
        catalog: state,
        kind,
    };

    let admin = Router::new()
        .route("/", post(sample_asset::create::<R>))
        .route(
            "/{id}",
            put(sample_asset::update::<R>).delete(sample_asset::delete::<R>),
        );

    let public = Router::new()
        .route("/", get(sample_asset::list::<R>))
        .route("/{id}", get(sample_asset::get::<R>));

    admin_only(admin, guard).merge(public).with_state(state)
}

pub fn setting_router<R>(state: CatalogAppState<R>, guard: AuthGuard) -> Router
where
    R: CatalogRepository,
{
    let admin = Router::new()
        .route("/logo", post(setting::update_logo::<R>))
        .route("/seo-content", post(setting::update_seo_content::<R>));

    let public = Router::new().route("/", get(setting::list::<R>));

    admin_only(admin, guard).merge(public).with_state(state)
}
