//! Category Service
//!
//! Categories group cake faces. A category created without a thumbnail
//! points at the shared `default.png`, which is never deleted.

use std::sync::Arc;

use kernel::query::Listing;
use platform::upload::UploadedFile;

use crate::application::config::{CatalogConfig, dirs};
use crate::application::fields::{flag, optional_name, required_name};
use crate::application::listing::ListInput;
use crate::application::media::{StagedFiles, found, generated_name};
use crate::domain::entity::audit::Audit;
use crate::domain::entity::category::{Category, CategoryPatch, NewCategory};
use crate::domain::repository::CategoryRepository;
use crate::domain::value_object::sort_field::SortField;
use crate::error::{CatalogError, CatalogResult};

pub const CATEGORY_NOT_FOUND: &str = "Category not found";

/// Raw multipart fields of a category create/update
#[derive(Debug, Default)]
pub struct CategoryForm {
    pub name: Option<String>,
    pub is_active: Option<String>,
    pub thumbnail: Option<UploadedFile>,
}

pub struct CategoryService<R>
where
    R: CategoryRepository,
{
    repo: Arc<R>,
    config: Arc<CatalogConfig>,
}

impl<R> CategoryService<R>
where
    R: CategoryRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<CatalogConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn create(&self, form: CategoryForm, creator: &str) -> CatalogResult<Category> {
        let name = required_name(form.name.as_deref())?;
        let is_active = flag(form.is_active.as_deref())?.unwrap_or(false);

        let mut files = StagedFiles::new(&self.config.media);
        let thumbnail = match &form.thumbnail {
            Some(file) => {
                files
                    .save(dirs::CATEGORY, &generated_name("cfc", file), file)
                    .await?
            }
            None => self.config.default_category_thumbnail(),
        };

        let category = NewCategory {
            name,
            thumbnail,
            is_active,
            audit: Audit::new(creator),
        };
        let created = files.settle(self.repo.insert_category(&category).await).await?;

        tracing::info!(
            id = created.id,
            name = %created.name,
            created_by = %creator,
            "Category created"
        );
        Ok(created)
    }

    pub async fn list(&self, input: ListInput) -> CatalogResult<Listing<Category>> {
        self.repo
            .list_categories(&input.into_filter(SortField::BASIC))
            .await
    }

    pub async fn get(&self, id: i32) -> CatalogResult<Category> {
        self.repo
            .find_category(id)
            .await?
            .ok_or(CatalogError::NotFound(CATEGORY_NOT_FOUND))
    }

    pub async fn update(
        &self,
        id: i32,
        form: CategoryForm,
        updater: &str,
    ) -> CatalogResult<Category> {
        let patch = CategoryPatch {
            name: optional_name(form.name.as_deref())?,
            is_active: flag(form.is_active.as_deref())?,
        };
        let mut category = self.get(id).await?;

        let mut files = StagedFiles::new(&self.config.media);
        if let Some(file) = &form.thumbnail {
            files
                .replace(
                    dirs::CATEGORY,
                    &generated_name("cfc", file),
                    file,
                    &mut category.thumbnail,
                )
                .await?;
        }
        category.apply(patch, updater);

        let updated = found(
            self.repo.update_category(&category).await,
            CATEGORY_NOT_FOUND,
        );
        files.settle(updated).await?;

        tracing::info!(id, updated_by = %updater, "Category updated");
        Ok(category)
    }

    pub async fn delete(&self, id: i32) -> CatalogResult<()> {
        let removed = self
            .repo
            .delete_category(id)
            .await?
            .ok_or(CatalogError::NotFound(CATEGORY_NOT_FOUND))?;

        self.config.media.discard(&removed.thumbnail).await;

        tracing::info!(id, "Category deleted");
        Ok(())
    }
}

/// `categoryId` of a cake face must name an existing category
pub(crate) async fn ensure_category<R>(repo: &R, id: i32) -> CatalogResult<()>
where
    R: CategoryRepository,
{
    match repo.find_category(id).await? {
        Some(_) => Ok(()),
        None => Err(CatalogError::NotFound(CATEGORY_NOT_FOUND)),
    }
}
