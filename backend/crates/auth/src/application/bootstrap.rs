//! Bootstrap Admin Use Case
//!
//! Accounts can only be created by an admin, so a fresh database needs one
//! seeded from the environment. Runs only while no credential exists.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::credential::Credential;
use crate::domain::entity::profile::{NewProfile, Profile};
use crate::domain::repository::{AccountRepository, CredentialRepository};
use crate::domain::value_object::{user_name::UserName, user_role::UserRole};
use crate::error::AuthResult;

const BOOTSTRAP_CREATOR: &str = "system";

/// Bootstrap admin use case
pub struct BootstrapAdminUseCase<R>
where
    R: CredentialRepository + AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> BootstrapAdminUseCase<R>
where
    R: CredentialRepository + AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Returns whether an admin was created
    pub async fn execute(&self, user_name: &str, password: String) -> AuthResult<bool> {
        if self.repo.count_credentials().await? > 0 {
            tracing::debug!("Credentials exist, skipping admin bootstrap");
            return Ok(false);
        }

        let user_name = UserName::new(user_name)?;
        let password_hash = ClearTextPassword::new(password)?.hash(self.config.pepper())?;

        let credential = Credential::new(user_name.clone(), password_hash);
        let profile = Profile::new(
            NewProfile {
                name: user_name.to_string(),
                user_name,
                address: String::new(),
                email: None,
                phone_number: String::new(),
                note: None,
                role: UserRole::Admin,
                is_active: true,
            },
            self.config.default_avatar(),
            BOOTSTRAP_CREATOR,
        );

        let created = self.repo.create_account(&credential, &profile).await?;
        if created {
            tracing::info!(user_name = %profile.user_name, "Bootstrapped admin account");
        }
        Ok(created)
    }
}
