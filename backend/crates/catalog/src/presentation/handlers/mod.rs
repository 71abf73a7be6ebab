//! HTTP Handlers
//!
//! One module per resource. Handlers are generic over the repository so the
//! router tests can run them against an in-memory store.

pub mod banner;
pub mod cake_face;
pub mod cake_face_option;
pub mod category;
pub mod sample_asset;
pub mod setting;

use std::fmt::Display;
use std::sync::Arc;

use kernel::id::Id;
use kernel::response::ApiResponse;

use crate::application::config::CatalogConfig;
use crate::domain::entity::sample_asset::SampleKind;
use crate::domain::repository::CatalogRepository;
use crate::error::{CatalogError, CatalogResult};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: CatalogRepository,
{
    pub repo: Arc<R>,
    pub config: Arc<CatalogConfig>,
}

/// State of the sample asset routers: which of the two tables they serve
#[derive(Clone)]
pub struct SampleAppState<R>
where
    R: CatalogRepository,
{
    pub catalog: CatalogAppState<R>,
    pub kind: SampleKind,
}

/// A path id that cannot name a row is answered like a missing row
pub(crate) fn serial_id(raw: &str, not_found: &'static str) -> CatalogResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| CatalogError::NotFound(not_found))
}

pub(crate) fn uuid_id<T>(raw: &str, not_found: &'static str) -> CatalogResult<Id<T>> {
    raw.parse::<Id<T>>()
        .map_err(|_| CatalogError::NotFound(not_found))
}

pub(crate) fn deleted(id: impl Display) -> ApiResponse<()> {
    ApiResponse::<()>::message(format!("Deleted {id}"))
}
