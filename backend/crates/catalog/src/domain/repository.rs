//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};
use kernel::id::{CakeFaceId, CakeFaceOptionId};
use kernel::query::{ActiveFilter, Listing, Page, SortOrder};

use crate::domain::entity::banner::Banner;
use crate::domain::entity::cake_face::CakeFace;
use crate::domain::entity::cake_face_option::CakeFaceOption;
use crate::domain::entity::category::{Category, NewCategory};
use crate::domain::entity::sample_asset::{NewSampleAsset, SampleAsset, SampleKind};
use crate::domain::entity::setting::Setting;
use crate::domain::value_object::banner_move::BannerMove;
use crate::domain::value_object::counter::Counter;
use crate::domain::value_object::sort_field::SortField;
use crate::error::CatalogResult;

/// Filters shared by every catalog list
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Case-insensitive "contains" on the name
    pub name: Option<String>,
    pub active: ActiveFilter,
    pub sort_by: SortField,
    pub sort: SortOrder,
    pub page: Page,
}

#[derive(Debug, Clone, Default)]
pub struct CakeFaceFilter {
    pub common: CatalogFilter,
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct CakeFaceOptionFilter {
    pub common: CatalogFilter,
    pub cake_face_id: Option<CakeFaceId>,
}

/// A deleted cake face plus the images of the options that went with it
#[derive(Debug, Clone)]
pub struct RemovedCakeFace {
    pub cake_face: CakeFace,
    pub option_images: Vec<String>,
}

/// Result of a banner swap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerMoveOutcome {
    Moved,
    BannerMissing,
    /// Already first (up) or last (down)
    NeighbourMissing,
}

#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    async fn insert_category(&self, category: &NewCategory) -> CatalogResult<Category>;

    async fn find_category(&self, id: i32) -> CatalogResult<Option<Category>>;

    /// Returns `false` when no row matched
    async fn update_category(&self, category: &Category) -> CatalogResult<bool>;

    /// Deletes and returns the row. Cake faces keep existing uncategorised.
    async fn delete_category(&self, id: i32) -> CatalogResult<Option<Category>>;

    async fn list_categories(&self, filter: &CatalogFilter) -> CatalogResult<Listing<Category>>;
}

#[trait_variant::make(CakeFaceRepository: Send)]
pub trait LocalCakeFaceRepository {
    async fn insert_cake_face(&self, cake_face: &CakeFace) -> CatalogResult<()>;

    async fn find_cake_face(&self, id: CakeFaceId) -> CatalogResult<Option<CakeFace>>;

    async fn update_cake_face(&self, cake_face: &CakeFace) -> CatalogResult<bool>;

    /// Deletes the row and, by cascade, its options
    async fn delete_cake_face(&self, id: CakeFaceId) -> CatalogResult<Option<RemovedCakeFace>>;

    async fn list_cake_faces(&self, filter: &CakeFaceFilter) -> CatalogResult<Listing<CakeFace>>;
}

#[trait_variant::make(CakeFaceOptionRepository: Send)]
pub trait LocalCakeFaceOptionRepository {
    async fn insert_option(&self, option: &CakeFaceOption) -> CatalogResult<()>;

    async fn find_option(&self, id: CakeFaceOptionId) -> CatalogResult<Option<CakeFaceOption>>;

    async fn update_option(&self, option: &CakeFaceOption) -> CatalogResult<bool>;

    async fn delete_option(&self, id: CakeFaceOptionId)
    -> CatalogResult<Option<CakeFaceOption>>;

    async fn list_options(
        &self,
        filter: &CakeFaceOptionFilter,
    ) -> CatalogResult<Listing<CakeFaceOption>>;

    /// Atomically add one to `counter`; `None` when the option is missing
    async fn increment_counter(
        &self,
        id: CakeFaceOptionId,
        counter: Counter,
    ) -> CatalogResult<Option<CakeFaceOption>>;
}

#[trait_variant::make(BannerRepository: Send)]
pub trait LocalBannerRepository {
    /// Insert at the end of the carousel (index = current count)
    async fn append_banner(&self, path: &str, create_time: DateTime<Utc>)
    -> CatalogResult<Banner>;

    /// Ordered by index ascending
    async fn list_banners(&self) -> CatalogResult<Vec<Banner>>;

    /// Swap indices with the neighbour in one transaction
    async fn move_banner(&self, id: i32, direction: BannerMove)
    -> CatalogResult<BannerMoveOutcome>;

    /// Delete and shift every later banner down by one, in one transaction
    async fn delete_banner(&self, id: i32) -> CatalogResult<Option<Banner>>;
}

#[trait_variant::make(SampleAssetRepository: Send)]
pub trait LocalSampleAssetRepository {
    async fn insert_sample(
        &self,
        kind: SampleKind,
        sample: &NewSampleAsset,
    ) -> CatalogResult<SampleAsset>;

    async fn find_sample(&self, kind: SampleKind, id: i32) -> CatalogResult<Option<SampleAsset>>;

    async fn update_sample(&self, sample: &SampleAsset) -> CatalogResult<bool>;

    async fn delete_sample(&self, kind: SampleKind, id: i32)
    -> CatalogResult<Option<SampleAsset>>;

    /// Active rows first, then the requested order
    async fn list_samples(
        &self,
        kind: SampleKind,
        filter: &CatalogFilter,
    ) -> CatalogResult<Listing<SampleAsset>>;
}

#[trait_variant::make(SettingRepository: Send)]
pub trait LocalSettingRepository {
    async fn find_setting(&self, name: &str) -> CatalogResult<Option<Setting>>;

    /// Insert or overwrite by name
    async fn upsert_setting(&self, name: &str, value: &str, updater: &str)
    -> CatalogResult<Setting>;

    async fn list_settings(&self) -> CatalogResult<Vec<Setting>>;
}

/// Everything the catalog routers need from one store
pub trait CatalogRepository:
    CategoryRepository
    + CakeFaceRepository
    + CakeFaceOptionRepository
    + BannerRepository
    + SampleAssetRepository
    + SettingRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> CatalogRepository for T where
    T: CategoryRepository
        + CakeFaceRepository
        + CakeFaceOptionRepository
        + BannerRepository
        + SampleAssetRepository
        + SettingRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}
