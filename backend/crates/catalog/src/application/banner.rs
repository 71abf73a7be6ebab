//! Banner Service
//!
//! The carousel order is the `index` column, contiguous from 0. New banners
//! go last; moves swap two neighbours; deletes close the gap.

use std::sync::Arc;

use platform::upload::UploadedFile;

use crate::application::config::{CatalogConfig, dirs};
use crate::application::media::{StagedFiles, banner_name, require_file};
use crate::domain::entity::banner::Banner;
use crate::domain::repository::{BannerMoveOutcome, BannerRepository};
use crate::domain::value_object::banner_move::BannerMove;
use crate::error::{CatalogError, CatalogResult};

pub const BANNER_NOT_FOUND: &str = "Banner not found";
pub const NO_NEIGHBOUR: &str = "No banner to swap with";

pub struct BannerService<R>
where
    R: BannerRepository,
{
    repo: Arc<R>,
    config: Arc<CatalogConfig>,
}

impl<R> BannerService<R>
where
    R: BannerRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<CatalogConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn create(&self, image: Option<UploadedFile>) -> CatalogResult<Banner> {
        let image = require_file(image, "image")?;

        let mut files = StagedFiles::new(&self.config.media);
        let path = files
            .save(dirs::BANNER, &banner_name(&image), &image)
            .await?;

        let banner = files
            .settle(self.repo.append_banner(&path, chrono::Utc::now()).await)
            .await?;

        tracing::info!(id = banner.id, index = banner.index, "Banner created");
        Ok(banner)
    }

    pub async fn list(&self) -> CatalogResult<Vec<Banner>> {
        self.repo.list_banners().await
    }

    /// Swap with the neighbour and return the reordered carousel
    pub async fn reorder(&self, id: i32, direction: BannerMove) -> CatalogResult<Vec<Banner>> {
        match self.repo.move_banner(id, direction).await? {
            BannerMoveOutcome::Moved => {
                tracing::info!(id, ?direction, "Banner moved");
                self.list().await
            }
            BannerMoveOutcome::BannerMissing => Err(CatalogError::NotFound(BANNER_NOT_FOUND)),
            BannerMoveOutcome::NeighbourMissing => Err(CatalogError::NotFound(NO_NEIGHBOUR)),
        }
    }

    pub async fn delete(&self, id: i32) -> CatalogResult<()> {
        let removed = self
            .repo
            .delete_banner(id)
            .await?
            .ok_or(CatalogError::NotFound(BANNER_NOT_FOUND))?;

        self.config.media.discard(&removed.path).await;

        tracing::info!(id, index = removed.index, "Banner deleted");
        Ok(())
    }
}
