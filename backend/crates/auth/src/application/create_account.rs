//! Create Account Use Case
//!
//! Admin-only. Writes the credential and the profile in one transaction and
//! stores the optional avatar under `<media root>/avatar/`.

use std::sync::Arc;

use kernel::query::parse_flag;
use platform::crypto::random_alphanumeric;
use platform::media::{safe_segment, upload_name};
use platform::password::ClearTextPassword;
use platform::upload::UploadedFile;

use crate::application::config::{AVATAR_DIR, AuthConfig};
use crate::domain::entity::credential::Credential;
use crate::domain::entity::profile::{NewProfile, Profile};
use crate::domain::repository::{AccountRepository, CredentialRepository};
use crate::domain::value_object::{email::Email, user_name::UserName, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Raw form values
#[derive(Debug, Default)]
pub struct CreateAccountInput {
    pub user_name: String,
    pub password: String,
    pub name: String,
    pub address: String,
    pub email: Option<String>,
    pub phone_number: String,
    pub note: Option<String>,
    /// `admin` / `client` / `user`, blank means `user`
    pub role: Option<String>,
    /// `'1'` / `'0'`
    pub is_active: String,
    pub avatar: Option<UploadedFile>,
}

/// Create account use case
pub struct CreateAccountUseCase<R>
where
    R: CredentialRepository + AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> CreateAccountUseCase<R>
where
    R: CredentialRepository + AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: CreateAccountInput, creator: &str) -> AuthResult<Profile> {
        let fields = validate(&input)?;
        let password = ClearTextPassword::new(input.password)?;

        if self
            .repo
            .find_credential(&fields.user_name)
            .await?
            .is_some()
        {
            return Err(AuthError::UserNameTaken);
        }

        let password_hash = password.hash(self.config.pepper())?;
        let credential = Credential::new(fields.user_name.clone(), password_hash);

        let avatar = match &input.avatar {
            Some(file) => self.store_avatar(&fields.user_name, file).await?,
            None => self.config.default_avatar(),
        };

        let profile = Profile::new(fields, avatar, creator);

        let created = match self.repo.create_account(&credential, &profile).await {
            Ok(created) => created,
            Err(e) => {
                self.config.media.discard(&profile.avatar).await;
                return Err(e);
            }
        };
        if !created {
            // lost a race with a concurrent create for the same name
            self.config.media.discard(&profile.avatar).await;
            return Err(AuthError::UserNameTaken);
        }

        tracing::info!(
            user_name = %profile.user_name,
            role = %profile.role,
            created_by = %creator,
            "Account created"
        );

        Ok(profile)
    }

    async fn store_avatar(&self, user_name: &UserName, file: &UploadedFile) -> AuthResult<String> {
        let millis = chrono::Utc::now().timestamp_millis().to_string();
        let name = upload_name(
            &[
                "avatar",
                &safe_segment(user_name.as_str()),
                &millis,
                &random_alphanumeric(10),
            ],
            &file.file_name,
        );
        Ok(self.config.media.save(AVATAR_DIR, &name, &file.bytes).await?)
    }
}

fn validate(input: &CreateAccountInput) -> AuthResult<NewProfile> {
    let user_name = UserName::new(&input.user_name)?;
    let email = Email::parse_optional(input.email.as_deref())?;

    let role = match input.role.as_deref().map(str::trim) {
        None | Some("") => UserRole::default(),
        Some(code) => UserRole::from_code(code)
            .ok_or_else(|| AuthError::Validation(format!("Unknown role: {code}")))?,
    };

    let is_active = parse_flag(&input.is_active)
        .ok_or_else(|| AuthError::Validation("isActive must be '1' or '0'".to_string()))?;

    Ok(NewProfile {
        user_name,
        name: required("name", &input.name)?,
        address: required("address", &input.address)?,
        email,
        phone_number: required("phoneNumber", &input.phone_number)?,
        note: input
            .note
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned),
        role,
        is_active,
    })
}

pub(crate) fn required(field: &str, value: &str) -> AuthResult<String> {
    let value = value.trim();
    if value.is_empty() {
        Err(AuthError::Validation(format!("{field} is required")))
    } else {
        Ok(value.to_owned())
    }
}
