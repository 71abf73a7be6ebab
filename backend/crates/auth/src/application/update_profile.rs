//! Update Profile Use Case
//!
//! Partial update of the profile fields an admin may edit. The user name
//! and the password are not editable here.

use std::sync::Arc;

use crate::application::create_account::required;
use crate::domain::entity::profile::{Profile, ProfilePatch};
use crate::domain::repository::ProfileRepository;
use crate::domain::value_object::{email::Email, user_name::UserName, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// `None` keeps the stored value
#[derive(Debug, Default)]
pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub note: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateProfileInput {
    fn into_patch(self) -> AuthResult<ProfilePatch> {
        let role = self
            .role
            .as_deref()
            .map(|code| {
                UserRole::from_code(code)
                    .ok_or_else(|| AuthError::Validation(format!("Unknown role: {code}")))
            })
            .transpose()?;

        Ok(ProfilePatch {
            name: self.name.as_deref().map(|v| required("name", v)).transpose()?,
            address: self
                .address
                .as_deref()
                .map(|v| required("address", v))
                .transpose()?,
            email: Email::parse_optional(self.email.as_deref())?,
            phone_number: self
                .phone_number
                .as_deref()
                .map(|v| required("phoneNumber", v))
                .transpose()?,
            note: self.note,
            role,
            is_active: self.is_active,
        })
    }
}

/// Update profile use case
pub struct UpdateProfileUseCase<P>
where
    P: ProfileRepository,
{
    profile_repo: Arc<P>,
}

impl<P> UpdateProfileUseCase<P>
where
    P: ProfileRepository,
{
    pub fn new(profile_repo: Arc<P>) -> Self {
        Self { profile_repo }
    }

    pub async fn execute(
        &self,
        user_name: &str,
        input: UpdateProfileInput,
        updater: &str,
    ) -> AuthResult<Profile> {
        let user_name = UserName::new(user_name).map_err(|_| AuthError::UserNotFound)?;
        let patch = input.into_patch()?;

        let mut profile = self
            .profile_repo
            .find_profile(&user_name)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        profile.apply(patch, updater);

        if !self.profile_repo.update_profile(&profile).await? {
            return Err(AuthError::UserNotFound);
        }

        tracing::info!(user_name = %profile.user_name, updated_by = %updater, "Profile updated");

        Ok(profile)
    }
}
