//! Upload Naming and Staging
//!
//! Generated names:
//!
//! ```text
//! {prefix}_{unix ms}_{10 random [A-Za-z0-9]}.{ext}     cfc_, cf_, cfo_, sb_, sp_
//! bn_{original stem}_{unix ms}_{10 random}.{ext}       banners
//! logo_{small|large}_{unix ms}.{ext}                   logos
//! ```
//!
//! [`StagedFiles`] tracks what a mutation wrote and what it replaced, so the
//! old files are removed only once the row write succeeded, and the new ones
//! are removed again when it failed.

use platform::crypto::random_alphanumeric;
use platform::media::{MediaStore, sanitized_stem, upload_name};
use platform::upload::UploadedFile;

use crate::domain::value_object::logo_kind::LogoKind;
use crate::error::{CatalogError, CatalogResult};

const RANDOM_SUFFIX_LEN: usize = 10;

fn millis() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

/// `{prefix}_{ms}_{rand10}.{ext}`
pub fn generated_name(prefix: &str, file: &UploadedFile) -> String {
    upload_name(
        &[prefix, &millis(), &random_alphanumeric(RANDOM_SUFFIX_LEN)],
        &file.file_name,
    )
}

/// `bn_{stem}_{ms}_{rand10}.{ext}`
pub fn banner_name(file: &UploadedFile) -> String {
    upload_name(
        &[
            "bn",
            &sanitized_stem(&file.file_name),
            &millis(),
            &random_alphanumeric(RANDOM_SUFFIX_LEN),
        ],
        &file.file_name,
    )
}

/// `logo_{kind}_{ms}_{rand10}.{ext}`
pub fn logo_name(kind: LogoKind, file: &UploadedFile) -> String {
    upload_name(
        &[
            "logo",
            kind.as_str(),
            &millis(),
            &random_alphanumeric(RANDOM_SUFFIX_LEN),
        ],
        &file.file_name,
    )
}

pub(crate) fn require_file(
    file: Option<UploadedFile>,
    field: &'static str,
) -> CatalogResult<UploadedFile> {
    file.ok_or(CatalogError::MissingFile(field))
}

/// `Ok(true)` from an update/delete, or the resource's 404
pub(crate) fn found(matched: CatalogResult<bool>, not_found: &'static str) -> CatalogResult<()> {
    match matched {
        Ok(true) => Ok(()),
        Ok(false) => Err(CatalogError::NotFound(not_found)),
        Err(e) => Err(e),
    }
}

/// Files written by one mutation
pub(crate) struct StagedFiles<'a> {
    media: &'a MediaStore,
    written: Vec<String>,
    replaced: Vec<String>,
}

impl<'a> StagedFiles<'a> {
    pub(crate) fn new(media: &'a MediaStore) -> Self {
        Self {
            media,
            written: Vec::new(),
            replaced: Vec::new(),
        }
    }

    /// Write a new file. On failure, everything staged so far is removed.
    pub(crate) async fn save(
        &mut self,
        dir: &str,
        name: &str,
        file: &UploadedFile,
    ) -> CatalogResult<String> {
        match self.media.save(dir, name, &file.bytes).await {
            Ok(stored) => {
                self.written.push(stored.clone());
                Ok(stored)
            }
            Err(e) => {
                self.discard_written().await;
                Err(e.into())
            }
        }
    }

    /// Write a new file into `slot`, remembering the path it replaces
    pub(crate) async fn replace(
        &mut self,
        dir: &str,
        name: &str,
        file: &UploadedFile,
        slot: &mut String,
    ) -> CatalogResult<()> {
        let stored = self.save(dir, name, file).await?;
        self.replaced.push(std::mem::replace(slot, stored));
        Ok(())
    }

    /// Finish the mutation: drop replaced files on success, written ones on
    /// failure.
    pub(crate) async fn settle<T>(self, result: CatalogResult<T>) -> CatalogResult<T> {
        match result {
            Ok(value) => {
                for old in &self.replaced {
                    self.media.discard(old).await;
                }
                Ok(value)
            }
            Err(e) => {
                self.discard_written().await;
                Err(e)
            }
        }
    }

    async fn discard_written(&self) {
        for stored in &self.written {
            self.media.discard(stored).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;

    fn upload(name: &str) -> UploadedFile {
        UploadedFile {
            file_name: name.to_owned(),
            content_type: Some("image/png".to_owned()),
            bytes: Bytes::from_static(b"png"),
        }
    }

    fn parts(name: &str) -> Vec<&str> {
        name.rsplit_once('.').unwrap().0.split('_').collect()
    }

    #[test]
    fn test_generated_name_scheme() {
        let name = generated_name("cfc", &upload("rose.PNG"));
        assert!(name.ends_with(".png"));
        let parts = parts(&name);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "cfc");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 10);
        assert!(parts[2].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_banner_name_keeps_stem() {
        let name = banner_name(&upload("summer sale.jpg"));
        assert!(name.starts_with("bn_summer_sale_"));
        assert!(name.ends_with(".jpg"));
    }

    #[test]
    fn test_logo_name() {
        let name = logo_name(LogoKind::Small, &upload("brand.webp"));
        assert!(name.starts_with("logo_small_"));
        assert!(name.ends_with(".webp"));
        assert_eq!(parts(&name).len(), 4);
        // Same kind within one millisecond still gets a fresh path
        assert_ne!(name, logo_name(LogoKind::Small, &upload("brand.webp")));
    }

    #[tokio::test]
    async fn test_settle_failure_removes_written_keeps_old() {
        let dir = tempfile::tempdir().unwrap();
        let media = MediaStore::new(dir.path().to_string_lossy().into_owned());
        let mut slot = media.save("banner", "old.png", b"old").await.unwrap();
        let old = slot.clone();

        let mut files = StagedFiles::new(&media);
        files
            .replace("banner", "new.png", &upload("new.png"), &mut slot)
            .await
            .unwrap();
        let result: CatalogResult<()> = files
            .settle(Err(CatalogError::NotFound("Banner not found")))
            .await;

        assert!(result.is_err());
        assert!(std::path::Path::new(&old).exists());
        assert!(!std::path::Path::new(&slot).exists());
    }

    #[tokio::test]
    async fn test_settle_success_removes_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let media = MediaStore::new(dir.path().to_string_lossy().into_owned());
        let mut slot = media.save("banner", "old.png", b"old").await.unwrap();
        let old = slot.clone();

        let mut files = StagedFiles::new(&media);
        files
            .replace("banner", "new.png", &upload("new.png"), &mut slot)
            .await
            .unwrap();
        files.settle(Ok(())).await.unwrap();

        assert!(!std::path::Path::new(&old).exists());
        assert!(std::path::Path::new(&slot).exists());
    }
}
