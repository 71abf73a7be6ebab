//! Profile Queries
//!
//! Single-profile lookup and the filtered user list.

use std::sync::Arc;

use kernel::query::{ListQuery, Listing, non_blank};

use crate::domain::entity::profile::Profile;
use crate::domain::repository::{ProfileFilter, ProfileRepository};
use crate::domain::value_object::{user_name::UserName, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Get profile use case
pub struct GetProfileUseCase<P>
where
    P: ProfileRepository,
{
    profile_repo: Arc<P>,
}

impl<P> GetProfileUseCase<P>
where
    P: ProfileRepository,
{
    pub fn new(profile_repo: Arc<P>) -> Self {
        Self { profile_repo }
    }

    pub async fn execute(&self, user_name: &str) -> AuthResult<Profile> {
        let user_name = UserName::new(user_name).map_err(|_| AuthError::UserNotFound)?;
        self.profile_repo
            .find_profile(&user_name)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}

/// List filters as they arrive in the query string
#[derive(Debug, Default)]
pub struct ListProfilesInput {
    pub common: ListQuery,
    pub keyword: Option<String>,
    pub role: Option<String>,
}

impl ListProfilesInput {
    /// Unknown roles mean "no role filter", like every other list parameter
    pub fn into_filter(self) -> ProfileFilter {
        ProfileFilter {
            keyword: non_blank(self.keyword.as_deref()).map(str::to_owned),
            active: self.common.active(),
            role: self.role.as_deref().and_then(UserRole::from_code),
            page: self.common.page(),
        }
    }
}

/// List profiles use case
pub struct ListProfilesUseCase<P>
where
    P: ProfileRepository,
{
    profile_repo: Arc<P>,
}

impl<P> ListProfilesUseCase<P>
where
    P: ProfileRepository,
{
    pub fn new(profile_repo: Arc<P>) -> Self {
        Self { profile_repo }
    }

    pub async fn execute(&self, input: ListProfilesInput) -> AuthResult<Listing<Profile>> {
        let filter = input.into_filter();
        self.profile_repo.list_profiles(&filter).await
    }
}
