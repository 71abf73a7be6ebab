//! Auth Middleware
//!
//! Two layers for guarded routes, applied innermost-last so they run in
//! this order:
//!
//! 1. [`require_auth`] verifies the bearer token and inserts [`AuthUser`]
//!    into the request extensions.
//! 2. [`require_roles`] checks that identity against the route's
//!    allow-list.
//!
//! ```ignore
//! Router::new()
//!     .route("/", post(create))
//!     .route_layer(from_fn_with_state(RoleGuard::admin(), require_roles))
//!     .route_layer(from_fn_with_state(guard, require_auth))
//! ```

use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer_token;

use crate::application::authenticate::IdentityResolver;
use crate::domain::entity::auth_user::AuthUser;
use crate::domain::value_object::user_role::UserRole;
use crate::error::AuthError;

/// State of [`require_auth`]
#[derive(Clone)]
pub struct AuthGuard {
    resolver: Arc<dyn IdentityResolver>,
}

impl AuthGuard {
    pub fn new(resolver: Arc<dyn IdentityResolver>) -> Self {
        Self { resolver }
    }
}

/// Middleware that requires a valid access token
pub async fn require_auth(
    State(guard): State<AuthGuard>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer_token(req.headers())
        .map_err(|e| {
            tracing::debug!(error = %e, "Rejected authorization header");
            AuthError::Unauthorized
        })?
        .to_owned();

    let user = guard.resolver.resolve(&token).await?;
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// State of [`require_roles`]: the route's allow-list
#[derive(Debug, Clone, Copy)]
pub struct RoleGuard {
    allowed: &'static [UserRole],
}

impl RoleGuard {
    pub const fn allow(allowed: &'static [UserRole]) -> Self {
        Self { allowed }
    }

    pub const fn admin() -> Self {
        Self::allow(&[UserRole::Admin])
    }
}

/// Middleware that requires the identity's role to be on the allow-list.
///
/// Answers 401 when [`require_auth`] did not run first.
pub async fn require_roles(
    State(roles): State<RoleGuard>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let user = req
        .extensions()
        .get::<AuthUser>()
        .ok_or(AuthError::Unauthorized)?;

    if !user.has_any_role(roles.allowed) {
        tracing::debug!(
            user_name = %user.user_name,
            role = %user.role,
            "Role not permitted on route"
        );
        return Err(AuthError::Forbidden);
    }

    Ok(next.run(req).await)
}

/// Extractor for the identity attached by [`require_auth`]
pub struct CurrentUser(pub AuthUser);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or(AuthError::Unauthorized)
    }
}
