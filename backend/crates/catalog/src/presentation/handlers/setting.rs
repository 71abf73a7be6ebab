//! `/settings` handlers

use auth::CurrentUser;
use axum::extract::State;
use kernel::extract::{ApiJson, ApiMultipart};
use kernel::response::{ApiResponse, Created};
use platform::upload::UploadForm;

use super::CatalogAppState;
use crate::application::SettingService;
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::{SeoContentRequest, SettingResponse};

fn service<R>(state: &CatalogAppState<R>) -> SettingService<R>
where
    R: CatalogRepository,
{
    SettingService::new(state.repo.clone(), state.config.clone())
}

/// POST /settings/logo
pub async fn update_logo<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(user): CurrentUser,
    ApiMultipart(multipart): ApiMultipart,
) -> CatalogResult<Created<SettingResponse>>
where
    R: CatalogRepository,
{
    let form = UploadForm::read(multipart).await?;
    let setting = service(&state)
        .update_logo(form.into(), &user.user_name)
        .await?;

    Ok(Created(
        ApiResponse::ok(SettingResponse::new(setting, &state.config))
            .with_message("Update Logo successfully"),
    ))
}

/// POST /settings/seo-content
pub async fn update_seo_content<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(user): CurrentUser,
    ApiJson(req): ApiJson<SeoContentRequest>,
) -> CatalogResult<ApiResponse<SettingResponse>>
where
    R: CatalogRepository,
{
    let setting = service(&state)
        .update_seo_content(&req.value, &user.user_name)
        .await?;

    Ok(ApiResponse::ok(SettingResponse::new(setting, &state.config)))
}

/// GET /settings
pub async fn list<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<ApiResponse<Vec<SettingResponse>>>
where
    R: CatalogRepository,
{
    let settings = service(&state).list().await?;

    Ok(ApiResponse::ok(
        settings
            .into_iter()
            .map(|setting| SettingResponse::new(setting, &state.config))
            .collect(),
    ))
}
