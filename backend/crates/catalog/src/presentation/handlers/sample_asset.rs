//! `/sample-background` and `/sample-pattern` handlers

use auth::CurrentUser;
use axum::extract::{Path, Query, State};
use kernel::extract::ApiMultipart;
use kernel::query::Listing;
use kernel::response::{ApiResponse, Created};
use platform::upload::UploadForm;

use super::{SampleAppState, deleted, serial_id};
use crate::application::SampleAssetService;
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::{CatalogListQuery, SampleAssetResponse};

fn service<R>(state: &SampleAppState<R>) -> SampleAssetService<R>
where
    R: CatalogRepository,
{
    SampleAssetService::new(
        state.kind,
        state.catalog.repo.clone(),
        state.catalog.config.clone(),
    )
}

/// POST /
pub async fn create<R>(
    State(state): State<SampleAppState<R>>,
    CurrentUser(user): CurrentUser,
    ApiMultipart(multipart): ApiMultipart,
) -> CatalogResult<Created<SampleAssetResponse>>
where
    R: CatalogRepository,
{
    let form = UploadForm::read(multipart).await?;
    let sample = service(&state).create(form.into(), &user.user_name).await?;

    Ok(Created(
        ApiResponse::ok(SampleAssetResponse::new(sample, &state.catalog.config))
            .with_message(state.kind.created_message()),
    ))
}

/// GET /
pub async fn list<R>(
    State(state): State<SampleAppState<R>>,
    Query(query): Query<CatalogListQuery>,
) -> CatalogResult<ApiResponse<Listing<SampleAssetResponse>>>
where
    R: CatalogRepository,
{
    let listing = service(&state).list(query.into()).await?;
    let config = &state.catalog.config;

    Ok(ApiResponse::ok(
        listing.map(|sample| SampleAssetResponse::new(sample, config)),
    ))
}

/// GET /{id}
pub async fn get<R>(
    State(state): State<SampleAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<ApiResponse<SampleAssetResponse>>
where
    R: CatalogRepository,
{
    let sample = service(&state)
        .get(serial_id(&id, state.kind.not_found())?)
        .await?;

    Ok(ApiResponse::ok(SampleAssetResponse::new(
        sample,
        &state.catalog.config,
    )))
}

/// PUT /{id}
pub async fn update<R>(
    State(state): State<SampleAppState<R>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    ApiMultipart(multipart): ApiMultipart,
) -> CatalogResult<ApiResponse<SampleAssetResponse>>
where
    R: CatalogRepository,
{
    let id = serial_id(&id, state.kind.not_found())?;
    let form = UploadForm::read(multipart).await?;
    let sample = service(&state)
        .update(id, form.into(), &user.user_name)
        .await?;

    Ok(ApiResponse::ok(SampleAssetResponse::new(
        sample,
        &state.catalog.config,
    )))
}

/// DELETE /{id}
pub async fn delete<R>(
    State(state): State<SampleAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<ApiResponse<()>>
where
    R: CatalogRepository,
{
    let id = serial_id(&id, state.kind.not_found())?;
    service(&state).delete(id).await?;

    Ok(deleted(id))
}
