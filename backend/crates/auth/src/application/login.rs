//! Login Use Case
//!
//! Verifies a user name + password pair and issues a token pair.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::{TokenPair, TokenService};
use crate::domain::entity::profile::Profile;
use crate::domain::repository::{CredentialRepository, ProfileRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

pub struct LoginInput {
    pub user_name: String,
    pub password: String,
}

pub struct LoginOutput {
    pub profile: Profile,
    pub tokens: TokenPair,
}

/// Login use case
pub struct LoginUseCase<C, P>
where
    C: CredentialRepository,
    P: ProfileRepository,
{
    credential_repo: Arc<C>,
    profile_repo: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<C, P> LoginUseCase<C, P>
where
    C: CredentialRepository,
    P: ProfileRepository,
{
    pub fn new(credential_repo: Arc<C>, profile_repo: Arc<P>, config: Arc<AuthConfig>) -> Self {
        Self {
            credential_repo,
            profile_repo,
            config,
        }
    }

    /// Unknown user, wrong password and a missing profile all answer
    /// [`AuthError::InvalidCredentials`].
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let user_name =
            UserName::new(&input.user_name).map_err(|_| AuthError::InvalidCredentials)?;

        let credential = self
            .credential_repo
            .find_credential(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = ClearTextPassword::candidate(input.password);
        if !credential.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let profile = self
            .profile_repo
            .find_profile(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let tokens =
            TokenService::new(&self.config).issue_pair(profile.user_name.as_str(), profile.role)?;

        tracing::info!(user_name = %profile.user_name, role = %profile.role, "User logged in");

        Ok(LoginOutput { profile, tokens })
    }
}
