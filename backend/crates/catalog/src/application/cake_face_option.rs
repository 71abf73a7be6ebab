//! Cake Face Option Service

use std::sync::Arc;

use kernel::id::{CakeFaceId, CakeFaceOptionId};
use kernel::query::Listing;
use platform::upload::UploadedFile;

use crate::application::cake_face::CAKE_FACE_NOT_FOUND;
use crate::application::config::{CatalogConfig, dirs};
use crate::application::fields::{cake_face_id, flag, optional_name, required_name};
use crate::application::listing::CakeFaceOptionListInput;
use crate::application::media::{StagedFiles, found, generated_name, require_file};
use crate::domain::entity::cake_face_option::{
    CakeFaceOption, CakeFaceOptionPatch, NewCakeFaceOption,
};
use crate::domain::repository::{CakeFaceOptionRepository, CakeFaceRepository};
use crate::domain::value_object::counter::Counter;
use crate::error::{CatalogError, CatalogResult};

pub const OPTION_NOT_FOUND: &str = "Cake Face Option Not Found";

const PREFIX: &str = "cfo";

#[derive(Debug, Default)]
pub struct CakeFaceOptionForm {
    pub name: Option<String>,
    pub detail: Option<String>,
    pub cake_face_id: Option<String>,
    pub is_active: Option<String>,
    pub image: Option<UploadedFile>,
}

pub struct CakeFaceOptionService<R>
where
    R: CakeFaceOptionRepository + CakeFaceRepository,
{
    repo: Arc<R>,
    config: Arc<CatalogConfig>,
}

impl<R> CakeFaceOptionService<R>
where
    R: CakeFaceOptionRepository + CakeFaceRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<CatalogConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn create(
        &self,
        form: CakeFaceOptionForm,
        creator: &str,
    ) -> CatalogResult<CakeFaceOption> {
        let fields = NewCakeFaceOption {
            name: required_name(form.name.as_deref())?,
            detail: form.detail.unwrap_or_default(),
            is_active: flag(form.is_active.as_deref())?.unwrap_or(false),
            cake_face_id: cake_face_id(form.cake_face_id.as_deref())?.ok_or_else(|| {
                CatalogError::Validation("cakeFaceId is required".to_string())
            })?,
        };
        let image = require_file(form.image, "image")?;

        self.ensure_cake_face(fields.cake_face_id).await?;

        let mut files = StagedFiles::new(&self.config.media);
        let image_path = files
            .save(
                dirs::CAKE_FACE_OPTION,
                &generated_name(PREFIX, &image),
                &image,
            )
            .await?;

        let option = CakeFaceOption::new(fields, image_path, creator);
        files.settle(self.repo.insert_option(&option).await).await?;

        tracing::info!(
            id = %option.id,
            cake_face_id = %option.cake_face_id,
            created_by = %creator,
            "Cake face option created"
        );
        Ok(option)
    }

    pub async fn list(
        &self,
        input: CakeFaceOptionListInput,
    ) -> CatalogResult<Listing<CakeFaceOption>> {
        self.repo.list_options(&input.into()).await
    }

    pub async fn get(&self, id: CakeFaceOptionId) -> CatalogResult<CakeFaceOption> {
        self.repo
            .find_option(id)
            .await?
            .ok_or(CatalogError::NotFound(OPTION_NOT_FOUND))
    }

    pub async fn update(
        &self,
        id: CakeFaceOptionId,
        form: CakeFaceOptionForm,
        updater: &str,
    ) -> CatalogResult<CakeFaceOption> {
        let patch = CakeFaceOptionPatch {
            name: optional_name(form.name.as_deref())?,
            detail: form.detail,
            is_active: flag(form.is_active.as_deref())?,
            cake_face_id: cake_face_id(form.cake_face_id.as_deref())?,
        };
        let mut option = self.get(id).await?;
        if let Some(cake_face_id) = patch.cake_face_id {
            self.ensure_cake_face(cake_face_id).await?;
        }

        let mut files = StagedFiles::new(&self.config.media);
        if let Some(file) = &form.image {
            files
                .replace(
                    dirs::CAKE_FACE_OPTION,
                    &generated_name(PREFIX, file),
                    file,
                    &mut option.image,
                )
                .await?;
        }
        option.apply(patch, updater);

        let updated = found(self.repo.update_option(&option).await, OPTION_NOT_FOUND);
        files.settle(updated).await?;

        tracing::info!(id = %id, updated_by = %updater, "Cake face option updated");
        Ok(option)
    }

    pub async fn delete(&self, id: CakeFaceOptionId) -> CatalogResult<()> {
        let removed = self
            .repo
            .delete_option(id)
            .await?
            .ok_or(CatalogError::NotFound(OPTION_NOT_FOUND))?;

        self.config.media.discard(&removed.image).await;

        tracing::info!(id = %id, "Cake face option deleted");
        Ok(())
    }

    /// Count a view or a download
    pub async fn rise(
        &self,
        id: CakeFaceOptionId,
        counter: Counter,
    ) -> CatalogResult<CakeFaceOption> {
        let option = self
            .repo
            .increment_counter(id, counter)
            .await?
            .ok_or(CatalogError::NotFound(OPTION_NOT_FOUND))?;

        tracing::debug!(id = %id, counter = counter.column(), "Option counter increased");
        Ok(option)
    }

    async fn ensure_cake_face(&self, id: CakeFaceId) -> CatalogResult<()> {
        match self.repo.find_cake_face(id).await? {
            Some(_) => Ok(()),
            None => Err(CatalogError::NotFound(CAKE_FACE_NOT_FOUND)),
        }
    }
}
