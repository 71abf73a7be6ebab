//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Login with user name + password, stateless JWT access/refresh pair
//! - Bearer-token authentication middleware and per-route role allow-lists
//! - Admin user management (create with avatar upload, update, list)
//! - First-admin bootstrap on an empty database
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional application-wide pepper
//! - Access and refresh tokens signed with distinct HS256 secrets
//! - Identity is re-read from the profile on every request, so a deleted
//!   account loses access immediately even with an unexpired token

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::entity::auth_user::AuthUser;
pub use domain::value_object::user_role::UserRole;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{AuthGuard, CurrentUser, RoleGuard, require_auth, require_roles};
pub use presentation::router::{auth_guard, auth_router, user_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAuthRepository as AuthStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
