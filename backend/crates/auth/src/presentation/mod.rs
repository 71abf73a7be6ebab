//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{AuthGuard, CurrentUser, RoleGuard, require_auth, require_roles};
pub use router::{auth_guard, auth_router, auth_router_generic, user_router, user_router_generic};
