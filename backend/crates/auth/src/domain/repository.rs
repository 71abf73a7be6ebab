//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::query::{ActiveFilter, Listing, Page};

use crate::domain::entity::{credential::Credential, profile::Profile};
use crate::domain::value_object::{user_name::UserName, user_role::UserRole};
use crate::error::AuthResult;

/// Filters for the user list
#[derive(Debug, Clone, Default)]
pub struct ProfileFilter {
    /// Case-insensitive match on user name, name or phone number
    pub keyword: Option<String>,
    pub active: ActiveFilter,
    pub role: Option<UserRole>,
    pub page: Page,
}

/// Credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    async fn find_credential(&self, user_name: &UserName) -> AuthResult<Option<Credential>>;

    /// Number of stored credentials (admin bootstrap runs only on zero)
    async fn count_credentials(&self) -> AuthResult<i64>;
}

/// Profile repository trait
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    async fn find_profile(&self, user_name: &UserName) -> AuthResult<Option<Profile>>;

    /// Returns `false` when no row matched
    async fn update_profile(&self, profile: &Profile) -> AuthResult<bool>;

    /// Ordered by user name ascending
    async fn list_profiles(&self, filter: &ProfileFilter) -> AuthResult<Listing<Profile>>;
}

/// Account creation spans both tables and must be atomic
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Insert credential and profile together.
    ///
    /// Returns `false` (and writes nothing) when the user name is taken.
    async fn create_account(&self, credential: &Credential, profile: &Profile)
    -> AuthResult<bool>;
}
