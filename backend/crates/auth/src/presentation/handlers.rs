//! HTTP Handlers

use axum::extract::{Path, Query, State};
use kernel::extract::{ApiJson, ApiMultipart};
use kernel::query::Listing;
use kernel::response::{ApiResponse, Created};
use platform::upload::UploadForm;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    CreateAccountInput, CreateAccountUseCase, GetProfileUseCase, ListProfilesUseCase, LoginInput,
    LoginUseCase, RefreshUseCase, TokenPair, UpdateProfileUseCase,
};
use crate::domain::repository::{AccountRepository, CredentialRepository, ProfileRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    LoginRequest, LoginResponse, ProfileResponse, RefreshRequest, UpdateProfileRequest,
    UserListQuery,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: CredentialRepository + ProfileRepository + AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: CredentialRepository + ProfileRepository + AccountRepository + Clone + Send + Sync + 'static,
{
    fn profile_response(&self, profile: crate::domain::entity::profile::Profile) -> ProfileResponse {
        ProfileResponse::from_profile(profile, &self.config.api_host)
    }
}

// ============================================================================
// Login / Refresh
// ============================================================================

/// POST /auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> AuthResult<ApiResponse<LoginResponse>>
where
    R: CredentialRepository + ProfileRepository + AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            user_name: req.user_name,
            password: req.password,
        })
        .await?;

    Ok(ApiResponse::ok(LoginResponse {
        user: state.profile_response(output.profile),
        access_token: output.tokens.access_token,
        refresh_token: output.tokens.refresh_token,
    })
    .with_message("Login successfully"))
}

/// POST /auth/refresh
pub async fn refresh<R>(
    State(state): State<AuthAppState<R>>,
    ApiJson(req): ApiJson<RefreshRequest>,
) -> AuthResult<ApiResponse<TokenPair>>
where
    R: CredentialRepository + ProfileRepository + AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        RefreshUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let tokens = use_case.execute(&req.refresh_token).await?;

    Ok(ApiResponse::ok(tokens))
}

// ============================================================================
// User Management (admin)
// ============================================================================

/// POST /user
pub async fn create_user<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(creator): CurrentUser,
    ApiMultipart(multipart): ApiMultipart,
) -> AuthResult<Created<ProfileResponse>>
where
    R: CredentialRepository + ProfileRepository + AccountRepository + Clone + Send + Sync + 'static,
{
    let mut form = UploadForm::read(multipart).await?;

    let input = CreateAccountInput {
        user_name: form.take_text("userName").unwrap_or_default(),
        password: form.take_text("password").unwrap_or_default(),
        name: form.take_text("name").unwrap_or_default(),
        address: form.take_text("address").unwrap_or_default(),
        email: form.take_text("email"),
        phone_number: form.take_text("phoneNumber").unwrap_or_default(),
        note: form.take_text("note"),
        role: form.take_text("role"),
        is_active: form.take_text("isActive").unwrap_or_default(),
        avatar: form.take_file("avatar"),
    };

    let use_case = CreateAccountUseCase::new(state.repo.clone(), state.config.clone());
    let profile = use_case.execute(input, &creator.user_name).await?;

    Ok(Created(
        ApiResponse::ok(state.profile_response(profile)).with_message("Create user successfully"),
    ))
}

/// PUT /user/{userName}
pub async fn update_user<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(updater): CurrentUser,
    Path(user_name): Path<String>,
    ApiJson(req): ApiJson<UpdateProfileRequest>,
) -> AuthResult<ApiResponse<ProfileResponse>>
where
    R: CredentialRepository + ProfileRepository + AccountRepository + Clone + Send + Sync + 'static,
{
    let input = req
        .into_input()
        .ok_or_else(|| AuthError::Validation("isActive must be '1' or '0'".to_string()))?;

    let use_case = UpdateProfileUseCase::new(state.repo.clone());
    let profile = use_case
        .execute(&user_name, input, &updater.user_name)
        .await?;

    Ok(ApiResponse::ok(state.profile_response(profile))
        .with_message("Update user's information successfully"))
}

/// GET /user/get-info/{userName}
pub async fn get_user<R>(
    State(state): State<AuthAppState<R>>,
    Path(user_name): Path<String>,
) -> AuthResult<ApiResponse<ProfileResponse>>
where
    R: CredentialRepository + ProfileRepository + AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetProfileUseCase::new(state.repo.clone());
    let profile = use_case.execute(&user_name).await?;

    Ok(ApiResponse::ok(state.profile_response(profile)))
}

/// GET /user
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
    Query(query): Query<UserListQuery>,
) -> AuthResult<ApiResponse<Listing<ProfileResponse>>>
where
    R: CredentialRepository + ProfileRepository + AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListProfilesUseCase::new(state.repo.clone());
    let listing = use_case.execute(query.into()).await?;

    Ok(ApiResponse::ok(
        listing.map(|profile| state.profile_response(profile)),
    ))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /user/get-info
pub async fn current_user<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(user): CurrentUser,
) -> AuthResult<ApiResponse<ProfileResponse>>
where
    R: CredentialRepository + ProfileRepository + AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetProfileUseCase::new(state.repo.clone());
    let profile = use_case.execute(&user.user_name).await?;

    Ok(ApiResponse::ok(state.profile_response(profile))
        .with_message("Get user's information successfully"))
}
