//! Refresh Use Case
//!
//! Trades a valid refresh token for a fresh token pair. The role is
//! re-read from the profile, so a role change takes effect on refresh.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::{TokenPair, TokenService};
use crate::domain::repository::{CredentialRepository, ProfileRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Refresh use case
pub struct RefreshUseCase<C, P>
where
    C: CredentialRepository,
    P: ProfileRepository,
{
    credential_repo: Arc<C>,
    profile_repo: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<C, P> RefreshUseCase<C, P>
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

    pub async fn execute(&self, refresh_token: &str) -> AuthResult<TokenPair> {
        let tokens = TokenService::new(&self.config);

        let claims = tokens.verify_refresh_token(refresh_token).map_err(|e| {
            tracing::debug!(error = %e, "Refresh token verification failed");
            AuthError::InvalidRefreshToken
        })?;

        let user_name =
            UserName::new(&claims.user_name).map_err(|_| AuthError::InvalidRefreshToken)?;

        if self
            .credential_repo
            .find_credential(&user_name)
            .await?
            .is_none()
        {
            return Err(AuthError::InvalidRefreshToken);
        }

        let profile = self
            .profile_repo
            .find_profile(&user_name)
            .await?
            .ok_or(AuthError::InvalidRefreshToken)?;

        tracing::debug!(user_name = %profile.user_name, "Issued refreshed token pair");

        tokens.issue_pair(profile.user_name.as_str(), profile.role)
    }
}
