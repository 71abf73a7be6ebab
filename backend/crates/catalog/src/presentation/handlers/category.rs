//! `/cake-face-category` handlers

use auth::CurrentUser;
use axum::extract::{Path, Query, State};
use kernel::extract::ApiMultipart;
use kernel::query::Listing;
use kernel::response::{ApiResponse, Created};
use platform::upload::UploadForm;

use super::{CatalogAppState, deleted, serial_id};
use crate::application::CategoryService;
use crate::application::category::CATEGORY_NOT_FOUND;
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::{CatalogListQuery, CategoryResponse};

fn service<R>(state: &CatalogAppState<R>) -> CategoryService<R>
where
    R: CatalogRepository,
{
    CategoryService::new(state.repo.clone(), state.config.clone())
}

/// POST /cake-face-category
pub async fn create<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(user): CurrentUser,
    ApiMultipart(multipart): ApiMultipart,
) -> CatalogResult<Created<CategoryResponse>>
where
    R: CatalogRepository,
{
    let form = UploadForm::read(multipart).await?;
    let category = service(&state).create(form.into(), &user.user_name).await?;

    Ok(Created(
        ApiResponse::ok(CategoryResponse::new(category, &state.config))
            .with_message("Create category successfully"),
    ))
}

/// GET /cake-face-category
pub async fn list<R>(
    State(state): State<CatalogAppState<R>>,
    Query(query): Query<CatalogListQuery>,
) -> CatalogResult<ApiResponse<Listing<CategoryResponse>>>
where
    R: CatalogRepository,
{
    let listing = service(&state).list(query.into()).await?;

    Ok(ApiResponse::ok(
        listing.map(|category| CategoryResponse::new(category, &state.config)),
    ))
}

/// GET /cake-face-category/{id}
pub async fn get<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<ApiResponse<CategoryResponse>>
where
    R: CatalogRepository,
{
    let category = service(&state)
        .get(serial_id(&id, CATEGORY_NOT_FOUND)?)
        .await?;

    Ok(ApiResponse::ok(CategoryResponse::new(category, &state.config)))
}

/// PUT /cake-face-category/{id}
pub async fn update<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    ApiMultipart(multipart): ApiMultipart,
) -> CatalogResult<ApiResponse<CategoryResponse>>
where
    R: CatalogRepository,
{
    let id = serial_id(&id, CATEGORY_NOT_FOUND)?;
    let form = UploadForm::read(multipart).await?;
    let category = service(&state)
        .update(id, form.into(), &user.user_name)
        .await?;

    Ok(ApiResponse::ok(CategoryResponse::new(category, &state.config)))
}

/// DELETE /cake-face-category/{id}
pub async fn delete<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<ApiResponse<()>>
where
    R: CatalogRepository,
{
    let id = serial_id(&id, CATEGORY_NOT_FOUND)?;
    service(&state).delete(id).await?;

    Ok(deleted(id))
}
