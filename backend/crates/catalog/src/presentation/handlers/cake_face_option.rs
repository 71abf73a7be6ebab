//! `/cake-face-option` handlers

use auth::CurrentUser;
use axum::extract::{Path, Query, State};
use kernel::extract::{ApiJson, ApiMultipart};
use kernel::query::Listing;
use kernel::response::{ApiResponse, Created};
use platform::upload::UploadForm;

use super::{CatalogAppState, deleted, uuid_id};
use crate::application::CakeFaceOptionService;
use crate::application::cake_face_option::OPTION_NOT_FOUND;
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::{CakeFaceOptionListQuery, CakeFaceOptionResponse, RiseRequest};

fn service<R>(state: &CatalogAppState<R>) -> CakeFaceOptionService<R>
where
    R: CatalogRepository,
{
    CakeFaceOptionService::new(state.repo.clone(), state.config.clone())
}

/// POST /cake-face-option
pub async fn create<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(user): CurrentUser,
    ApiMultipart(multipart): ApiMultipart,
) -> CatalogResult<Created<CakeFaceOptionResponse>>
where
    R: CatalogRepository,
{
    let form = UploadForm::read(multipart).await?;
    let option = service(&state).create(form.into(), &user.user_name).await?;

    Ok(Created(
        ApiResponse::ok(CakeFaceOptionResponse::new(option, &state.config))
            .with_message("Create Cake Face Option Successfully"),
    ))
}

/// GET /cake-face-option
pub async fn list<R>(
    State(state): State<CatalogAppState<R>>,
    Query(query): Query<CakeFaceOptionListQuery>,
) -> CatalogResult<ApiResponse<Listing<CakeFaceOptionResponse>>>
where
    R: CatalogRepository,
{
    let listing = service(&state).list(query.into()).await?;

    Ok(ApiResponse::ok(
        listing.map(|option| CakeFaceOptionResponse::new(option, &state.config)),
    ))
}

/// GET /cake-face-option/{id}
pub async fn get<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<ApiResponse<CakeFaceOptionResponse>>
where
    R: CatalogRepository,
{
    let option = service(&state)
        .get(uuid_id(&id, OPTION_NOT_FOUND)?)
        .await?;

    Ok(ApiResponse::ok(CakeFaceOptionResponse::new(option, &state.config)))
}

/// PUT /cake-face-option/{id}
pub async fn update<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    ApiMultipart(multipart): ApiMultipart,
) -> CatalogResult<ApiResponse<CakeFaceOptionResponse>>
where
    R: CatalogRepository,
{
    let id = uuid_id(&id, OPTION_NOT_FOUND)?;
    let form = UploadForm::read(multipart).await?;
    let option = service(&state)
        .update(id, form.into(), &user.user_name)
        .await?;

    Ok(ApiResponse::ok(CakeFaceOptionResponse::new(option, &state.config)))
}

/// DELETE /cake-face-option/{id}
pub async fn delete<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<ApiResponse<()>>
where
    R: CatalogRepository,
{
    let id = uuid_id(&id, OPTION_NOT_FOUND)?;
    service(&state).delete(id).await?;

    Ok(deleted(id))
}

/// POST /cake-face-option/{id}/rise
pub async fn rise<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<RiseRequest>,
) -> CatalogResult<ApiResponse<CakeFaceOptionResponse>>
where
    R: CatalogRepository,
{
    let option = service(&state)
        .rise(uuid_id(&id, OPTION_NOT_FOUND)?, req.counter)
        .await?;

    Ok(ApiResponse::ok(CakeFaceOptionResponse::new(option, &state.config)))
}
