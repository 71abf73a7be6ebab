//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{auth_user::AuthUser, credential::Credential, profile::Profile};
pub use repository::{AccountRepository, CredentialRepository, ProfileRepository};
