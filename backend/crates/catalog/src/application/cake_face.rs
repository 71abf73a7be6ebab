//! Cake Face Service
//!
//! A cake face needs both its thumbnail and its editor config file. Deleting
//! one also removes the images of the options that cascade with it.

use std::sync::Arc;

use kernel::id::CakeFaceId;
use kernel::query::Listing;
use platform::upload::UploadedFile;

use crate::application::category::ensure_category;
use crate::application::config::{CatalogConfig, dirs};
use crate::application::fields::{category_id, flag, optional_name, required_name};
use crate::application::listing::CakeFaceListInput;
use crate::application::media::{StagedFiles, found, generated_name, require_file};
use crate::domain::entity::cake_face::{CakeFace, CakeFacePatch, NewCakeFace};
use crate::domain::repository::{CakeFaceRepository, CategoryRepository};
use crate::error::{CatalogError, CatalogResult};

pub const CAKE_FACE_NOT_FOUND: &str = "Cake Face Not Found";

const PREFIX: &str = "cf";

#[derive(Debug, Default)]
pub struct CakeFaceForm {
    pub name: Option<String>,
    pub detail: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<String>,
    pub is_active: Option<String>,
    pub thumbnail: Option<UploadedFile>,
    pub config_file: Option<UploadedFile>,
}

pub struct CakeFaceService<R>
where
    R: CakeFaceRepository + CategoryRepository,
{
    repo: Arc<R>,
    config: Arc<CatalogConfig>,
}

impl<R> CakeFaceService<R>
where
    R: CakeFaceRepository + CategoryRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<CatalogConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn create(&self, form: CakeFaceForm, creator: &str) -> CatalogResult<CakeFace> {
        let fields = NewCakeFace {
            name: required_name(form.name.as_deref())?,
            detail: form.detail.unwrap_or_default(),
            content: form.content.unwrap_or_default(),
            is_active: flag(form.is_active.as_deref())?.unwrap_or(false),
            category_id: category_id(form.category_id.as_deref())?.ok_or_else(|| {
                CatalogError::Validation("categoryId is required".to_string())
            })?,
        };
        let thumbnail = require_file(form.thumbnail, "thumbnail")?;
        let config_file = require_file(form.config_file, "configFile")?;

        ensure_category(self.repo.as_ref(), fields.category_id).await?;

        let mut files = StagedFiles::new(&self.config.media);
        let thumbnail_path = files
            .save(dirs::CAKE_FACE, &generated_name(PREFIX, &thumbnail), &thumbnail)
            .await?;
        let config_path = files
            .save(
                dirs::CAKE_FACE,
                &generated_name(PREFIX, &config_file),
                &config_file,
            )
            .await?;

        let cake_face = CakeFace::new(fields, thumbnail_path, config_path, creator);
        files
            .settle(self.repo.insert_cake_face(&cake_face).await)
            .await?;

        tracing::info!(
            id = %cake_face.id,
            name = %cake_face.name,
            created_by = %creator,
            "Cake face created"
        );
        Ok(cake_face)
    }

    pub async fn list(&self, input: CakeFaceListInput) -> CatalogResult<Listing<CakeFace>> {
        self.repo.list_cake_faces(&input.into()).await
    }

    pub async fn get(&self, id: CakeFaceId) -> CatalogResult<CakeFace> {
        self.repo
            .find_cake_face(id)
            .await?
            .ok_or(CatalogError::NotFound(CAKE_FACE_NOT_FOUND))
    }

    pub async fn update(
        &self,
        id: CakeFaceId,
        form: CakeFaceForm,
        updater: &str,
    ) -> CatalogResult<CakeFace> {
        let patch = CakeFacePatch {
            name: optional_name(form.name.as_deref())?,
            detail: form.detail,
            content: form.content,
            is_active: flag(form.is_active.as_deref())?,
            category_id: category_id(form.category_id.as_deref())?,
        };
        let mut cake_face = self.get(id).await?;
        if let Some(category_id) = patch.category_id {
            ensure_category(self.repo.as_ref(), category_id).await?;
        }

        let mut files = StagedFiles::new(&self.config.media);
        if let Some(file) = &form.thumbnail {
            files
                .replace(
                    dirs::CAKE_FACE,
                    &generated_name(PREFIX, file),
                    file,
                    &mut cake_face.thumbnail,
                )
                .await?;
        }
        if let Some(file) = &form.config_file {
            files
                .replace(
                    dirs::CAKE_FACE,
                    &generated_name(PREFIX, file),
                    file,
                    &mut cake_face.config_file_path,
                )
                .await?;
        }
        cake_face.apply(patch, updater);

        let updated = found(
            self.repo.update_cake_face(&cake_face).await,
            CAKE_FACE_NOT_FOUND,
        );
        files.settle(updated).await?;

        tracing::info!(id = %id, updated_by = %updater, "Cake face updated");
        Ok(cake_face)
    }

    pub async fn delete(&self, id: CakeFaceId) -> CatalogResult<()> {
        let removed = self
            .repo
            .delete_cake_face(id)
            .await?
            .ok_or(CatalogError::NotFound(CAKE_FACE_NOT_FOUND))?;

        let media = &self.config.media;
        media.discard(&removed.cake_face.thumbnail).await;
        media.discard(&removed.cake_face.config_file_path).await;
        for image in &removed.option_images {
            media.discard(image).await;
        }

        tracing::info!(
            id = %id,
            options = removed.option_images.len(),
            "Cake face deleted"
        );
        Ok(())
    }
}
