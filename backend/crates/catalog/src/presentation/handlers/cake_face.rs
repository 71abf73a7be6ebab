//! `/cake-face` handlers

use auth::CurrentUser;
use axum::extract::{Path, Query, State};
use kernel::extract::ApiMultipart;
use kernel::query::Listing;
use kernel::response::{ApiResponse, Created};
use platform::upload::UploadForm;

use super::{CatalogAppState, deleted, uuid_id};
use crate::application::CakeFaceService;
use crate::application::cake_face::CAKE_FACE_NOT_FOUND;
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::{CakeFaceListQuery, CakeFaceResponse};

fn service<R>(state: &CatalogAppState<R>) -> CakeFaceService<R>
where
    R: CatalogRepository,
{
    CakeFaceService::new(state.repo.clone(), state.config.clone())
}

/// POST /cake-face
pub async fn create<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(user): CurrentUser,
    ApiMultipart(multipart): ApiMultipart,
) -> CatalogResult<Created<CakeFaceResponse>>
where
    R: CatalogRepository,
{
    let form = UploadForm::read(multipart).await?;
    let cake_face = service(&state).create(form.into(), &user.user_name).await?;

    Ok(Created(
        ApiResponse::ok(CakeFaceResponse::new(cake_face, &state.config))
            .with_message("Create Cake face successfully"),
    ))
}

/// GET /cake-face
pub async fn list<R>(
    State(state): State<CatalogAppState<R>>,
    Query(query): Query<CakeFaceListQuery>,
) -> CatalogResult<ApiResponse<Listing<CakeFaceResponse>>>
where
    R: CatalogRepository,
{
    let listing = service(&state).list(query.into()).await?;

    Ok(ApiResponse::ok(
        listing.map(|cake_face| CakeFaceResponse::new(cake_face, &state.config)),
    ))
}

/// GET /cake-face/{id}
pub async fn get<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<ApiResponse<CakeFaceResponse>>
where
    R: CatalogRepository,
{
    let cake_face = service(&state)
        .get(uuid_id(&id, CAKE_FACE_NOT_FOUND)?)
        .await?;

    Ok(ApiResponse::ok(CakeFaceResponse::new(cake_face, &state.config)))
}

/// PUT /cake-face/{id}
pub async fn update<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    ApiMultipart(multipart): ApiMultipart,
) -> CatalogResult<ApiResponse<CakeFaceResponse>>
where
    R: CatalogRepository,
{
    let id = uuid_id(&id, CAKE_FACE_NOT_FOUND)?;
    let form = UploadForm::read(multipart).await?;
    let cake_face = service(&state)
        .update(id, form.into(), &user.user_name)
        .await?;

    Ok(ApiResponse::ok(CakeFaceResponse::new(cake_face, &state.config)))
}

/// DELETE /cake-face/{id}
pub async fn delete<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<ApiResponse<()>>
where
    R: CatalogRepository,
{
    let id = uuid_id(&id, CAKE_FACE_NOT_FOUND)?;
    service(&state).delete(id).await?;

    Ok(deleted(id))
}
