//! Authenticated Identity
//!
//! What the request authenticator attaches to request extensions once a
//! bearer token has been verified against a live credential and profile.

use serde::Serialize;

use crate::domain::value_object::user_role::UserRole;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub user_name: String,
    pub role: UserRole,
}

impl AuthUser {
    pub fn new(user_name: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_name: user_name.into(),
            role,
        }
    }

    /// Whether this identity passes an allow-list (no hierarchy)
    pub fn has_any_role(&self, allowed: &[UserRole]) -> bool {
        allowed.contains(&self.role)
    }
}
