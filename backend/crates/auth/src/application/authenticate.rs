//! Authenticate Use Case
//!
//! Turns a bearer token into an [`AuthUser`]. Every failure collapses into
//! [`AuthError::Unauthorized`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::auth_user::AuthUser;
use crate::domain::repository::{CredentialRepository, ProfileRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Object-safe token resolver held by the auth middleware.
///
/// Lets other crates guard their routers without knowing the repository
/// type behind the identity lookup.
pub trait IdentityResolver: Send + Sync {
    fn resolve<'a>(
        &'a self,
        token: &'a str,
    ) -> Pin<Box<dyn Future<Output = AuthResult<AuthUser>> + Send + 'a>>;
}

/// Authenticate use case
pub struct AuthenticateUseCase<C, P>
where
    C: CredentialRepository,
    P: ProfileRepository,
{
    credential_repo: Arc<C>,
    profile_repo: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<C, P> AuthenticateUseCase<C, P>
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

    pub async fn execute(&self, token: &str) -> AuthResult<AuthUser> {
        let claims = TokenService::new(&self.config)
            .verify_access_token(token)
            .map_err(|e| {
                tracing::debug!(error = %e, "Access token rejected");
                AuthError::Unauthorized
            })?;

        let user_name = UserName::new(&claims.user_name).map_err(|_| AuthError::Unauthorized)?;

        if self
            .credential_repo
            .find_credential(&user_name)
            .await?
            .is_none()
        {
            tracing::debug!(user_name = %user_name, "Token for unknown credential");
            return Err(AuthError::Unauthorized);
        }

        let profile = self
            .profile_repo
            .find_profile(&user_name)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        Ok(AuthUser::new(profile.user_name.into_string(), profile.role))
    }
}

impl<C, P> IdentityResolver for AuthenticateUseCase<C, P>
where
    C: CredentialRepository + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    fn resolve<'a>(
        &'a self,
        token: &'a str,
    ) -> Pin<Box<dyn Future<Output = AuthResult<AuthUser>> + Send + 'a>> {
        Box::pin(self.execute(token))
    }
}
