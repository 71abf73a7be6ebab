//! Setting Service
//!
//! Logos are files under `<root>/logo/`; the setting row stores the path.
//! `seo_content` is plain text.

use std::sync::Arc;

use platform::upload::UploadedFile;

use crate::application::config::{CatalogConfig, dirs};
use crate::application::media::{StagedFiles, logo_name, require_file};
use crate::domain::entity::setting::Setting;
use crate::domain::repository::SettingRepository;
use crate::domain::value_object::logo_kind::{ICO_LOGO, LogoKind, SEO_CONTENT};
use crate::error::CatalogResult;

#[derive(Debug, Default)]
pub struct LogoForm {
    /// `small` / `large`
    pub name: Option<String>,
    pub image: Option<UploadedFile>,
}

pub struct SettingService<R>
where
    R: SettingRepository,
{
    repo: Arc<R>,
    config: Arc<CatalogConfig>,
}

impl<R> SettingService<R>
where
    R: SettingRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<CatalogConfig>) -> Self {
        Self { repo, config }
    }

    /// Store a new logo and point `{kind}_logo` at it.
    ///
    /// The small logo doubles as the favicon, so `ico_logo` follows it.
    pub async fn update_logo(&self, form: LogoForm, updater: &str) -> CatalogResult<Setting> {
        let kind = LogoKind::parse(form.name.as_deref().unwrap_or_default())?;
        let image = require_file(form.image, "image")?;

        let previous = self.repo.find_setting(kind.setting_name()).await?;
        let previous_ico = match kind {
            LogoKind::Small => self.repo.find_setting(ICO_LOGO).await?,
            LogoKind::Large => None,
        };

        let mut files = StagedFiles::new(&self.config.media);
        let path = files
            .save(dirs::LOGO, &logo_name(kind, &image), &image)
            .await?;

        let saved = self.save_logo_rows(kind, &path, updater).await;
        let setting = files.settle(saved).await?;

        let media = &self.config.media;
        let mut stale: Vec<String> = previous.into_iter().map(|s| s.value).collect();
        stale.extend(previous_ico.map(|s| s.value));
        stale.dedup();
        for old in stale.iter().filter(|old| **old != path) {
            media.discard(old).await;
        }

        tracing::info!(setting = kind.setting_name(), updated_by = %updater, "Logo updated");
        Ok(setting)
    }

    async fn save_logo_rows(
        &self,
        kind: LogoKind,
        path: &str,
        updater: &str,
    ) -> CatalogResult<Setting> {
        let setting = self
            .repo
            .upsert_setting(kind.setting_name(), path, updater)
            .await?;
        if kind == LogoKind::Small {
            self.repo.upsert_setting(ICO_LOGO, path, updater).await?;
        }
        Ok(setting)
    }

    pub async fn update_seo_content(&self, value: &str, updater: &str) -> CatalogResult<Setting> {
        let setting = self
            .repo
            .upsert_setting(SEO_CONTENT, value, updater)
            .await?;

        tracing::info!(updated_by = %updater, "SEO content updated");
        Ok(setting)
    }

    pub async fn list(&self) -> CatalogResult<Vec<Setting>> {
        self.repo.list_settings().await
    }
}
