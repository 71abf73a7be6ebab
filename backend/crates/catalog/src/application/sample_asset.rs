//! Sample Asset Service
//!
//! Backgrounds and patterns share one implementation; [`SampleKind`] picks
//! the table, the media directory and the `sb_`/`sp_` prefix.

use std::sync::Arc;

use kernel::query::Listing;
use platform::upload::UploadedFile;

use crate::application::config::CatalogConfig;
use crate::application::fields::{flag, optional_name, required_name};
use crate::application::listing::ListInput;
use crate::application::media::{StagedFiles, found, generated_name, require_file};
use crate::domain::entity::audit::Audit;
use crate::domain::entity::sample_asset::{
    NewSampleAsset, SampleAsset, SampleAssetPatch, SampleKind,
};
use crate::domain::repository::SampleAssetRepository;
use crate::domain::value_object::sort_field::SortField;
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Default)]
pub struct SampleAssetForm {
    pub name: Option<String>,
    pub is_active: Option<String>,
    pub image: Option<UploadedFile>,
}

pub struct SampleAssetService<R>
where
    R: SampleAssetRepository,
{
    kind: SampleKind,
    repo: Arc<R>,
    config: Arc<CatalogConfig>,
}

impl<R> SampleAssetService<R>
where
    R: SampleAssetRepository,
{
    pub fn new(kind: SampleKind, repo: Arc<R>, config: Arc<CatalogConfig>) -> Self {
        Self { kind, repo, config }
    }

    pub async fn create(&self, form: SampleAssetForm, creator: &str) -> CatalogResult<SampleAsset> {
        let name = required_name(form.name.as_deref())?;
        let is_active = flag(form.is_active.as_deref())?.unwrap_or(false);
        let image = require_file(form.image, "image")?;

        let mut files = StagedFiles::new(&self.config.media);
        let image_path = files
            .save(
                self.kind.media_dir(),
                &generated_name(self.kind.prefix(), &image),
                &image,
            )
            .await?;

        let sample = NewSampleAsset {
            name,
            image: image_path,
            is_active,
            audit: Audit::new(creator),
        };
        let created = files
            .settle(self.repo.insert_sample(self.kind, &sample).await)
            .await?;

        tracing::info!(
            table = self.kind.table(),
            id = created.id,
            created_by = %creator,
            "Sample asset created"
        );
        Ok(created)
    }

    pub async fn list(&self, input: ListInput) -> CatalogResult<Listing<SampleAsset>> {
        self.repo
            .list_samples(self.kind, &input.into_filter(SortField::BASIC))
            .await
    }

    pub async fn get(&self, id: i32) -> CatalogResult<SampleAsset> {
        self.repo
            .find_sample(self.kind, id)
            .await?
            .ok_or(CatalogError::NotFound(self.kind.not_found()))
    }

    pub async fn update(
        &self,
        id: i32,
        form: SampleAssetForm,
        updater: &str,
    ) -> CatalogResult<SampleAsset> {
        let patch = SampleAssetPatch {
            name: optional_name(form.name.as_deref())?,
            is_active: flag(form.is_active.as_deref())?,
        };
        let mut sample = self.get(id).await?;

        let mut files = StagedFiles::new(&self.config.media);
        if let Some(file) = &form.image {
            files
                .replace(
                    self.kind.media_dir(),
                    &generated_name(self.kind.prefix(), file),
                    file,
                    &mut sample.image,
                )
                .await?;
        }
        sample.apply(patch, updater);

        let updated = found(
            self.repo.update_sample(&sample).await,
            self.kind.not_found(),
        );
        files.settle(updated).await?;

        tracing::info!(
            table = self.kind.table(),
            id,
            updated_by = %updater,
            "Sample asset updated"
        );
        Ok(sample)
    }

    pub async fn delete(&self, id: i32) -> CatalogResult<()> {
        let removed = self
            .repo
            .delete_sample(self.kind, id)
            .await?
            .ok_or(CatalogError::NotFound(self.kind.not_found()))?;

        self.config.media.discard(&removed.image).await;

        tracing::info!(table = self.kind.table(), id, "Sample asset deleted");
        Ok(())
    }
}
