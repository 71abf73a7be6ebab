//! `/banners` handlers

use axum::extract::{Path, State};
use kernel::extract::{ApiJson, ApiMultipart};
use kernel::response::{ApiResponse, Created};
use platform::upload::UploadForm;

use super::{CatalogAppState, deleted, serial_id};
use crate::application::BannerService;
use crate::application::banner::BANNER_NOT_FOUND;
use crate::domain::entity::banner::Banner;
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::{BannerMoveRequest, BannerResponse};

fn service<R>(state: &CatalogAppState<R>) -> BannerService<R>
where
    R: CatalogRepository,
{
    BannerService::new(state.repo.clone(), state.config.clone())
}

fn responses<R>(state: &CatalogAppState<R>, banners: Vec<Banner>) -> Vec<BannerResponse>
where
    R: CatalogRepository,
{
    banners
        .into_iter()
        .map(|banner| BannerResponse::new(banner, &state.config))
        .collect()
}

/// POST /banners
pub async fn create<R>(
    State(state): State<CatalogAppState<R>>,
    ApiMultipart(multipart): ApiMultipart,
) -> CatalogResult<Created<BannerResponse>>
where
    R: CatalogRepository,
{
    let mut form = UploadForm::read(multipart).await?;
    let banner = service(&state).create(form.take_file("image")).await?;

    Ok(Created(
        ApiResponse::ok(BannerResponse::new(banner, &state.config))
            .with_message("Create banner successfully"),
    ))
}

/// GET /banners
pub async fn list<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<ApiResponse<Vec<BannerResponse>>>
where
    R: CatalogRepository,
{
    let banners = service(&state).list().await?;

    Ok(ApiResponse::ok(responses(&state, banners)))
}

/// PUT /banners/{id}
pub async fn reorder<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<BannerMoveRequest>,
) -> CatalogResult<ApiResponse<Vec<BannerResponse>>>
where
    R: CatalogRepository,
{
    let banners = service(&state)
        .reorder(serial_id(&id, BANNER_NOT_FOUND)?, req.action)
        .await?;

    Ok(ApiResponse::ok(responses(&state, banners)))
}

/// DELETE /banners/{id}
pub async fn delete<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<ApiResponse<()>>
where
    R: CatalogRepository,
{
    let id = serial_id(&id, BANNER_NOT_FOUND)?;
    service(&state).delete(id).await?;

    Ok(deleted(id))
}
