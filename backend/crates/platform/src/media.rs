//! Local Media Storage
//!
//! Uploaded images and config files are written under a configured root
//! (`MEDIA_UPLOAD_PATH`), one subdirectory per resource type:
//!
//! ```text
//! <root>/banner/bn_summer_1718000000000_a8Zk2LmQ0p.png
//! <root>/cake-face-category/default.png
//! ```
//!
//! The stored path (root included, `/`-separated) is what goes into the
//! database. Public URLs are `<API_HOST>/<stored path>`.

use std::io;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },

    #[error("failed to remove {path}: {source}")]
    Remove { path: String, source: io::Error },

    #[error("refusing to touch path outside the media root: {0}")]
    OutsideRoot(String),
}

/// Disk-backed store rooted at one directory
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: String,
}

impl MediaStore {
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into().replace('\\', "/");
        let mut trimmed = root.trim_end_matches('/');
        while let Some(rest) = trimmed.strip_prefix("./") {
            trimmed = rest.trim_start_matches('/');
        }
        Self {
            root: if trimmed.is_empty() {
                ".".to_owned()
            } else {
                trimmed.to_owned()
            },
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Stored path for a file in `subdir`
    pub fn stored_path(&self, subdir: &str, file_name: &str) -> String {
        format!("{}/{}/{}", self.root, subdir.trim_matches('/'), file_name)
    }

    /// Write `bytes` and return the stored path
    pub async fn save(
        &self,
        subdir: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, MediaError> {
        let stored = self.stored_path(subdir, file_name);
        self.ensure_inside(&stored)?;

        let write = async {
            if let Some(parent) = Path::new(&stored).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&stored, bytes).await
        };
        write.await.map_err(|source| MediaError::Write {
            path: stored.clone(),
            source,
        })?;

        tracing::debug!(path = %stored, size = bytes.len(), "Stored upload");
        Ok(stored)
    }

    /// Delete a stored file.
    ///
    /// Default assets are never removed. A file that is already gone is not
    /// an error. Returns whether a file was deleted.
    pub async fn remove(&self, stored: &str) -> Result<bool, MediaError> {
        if is_default_asset(stored) {
            return Ok(false);
        }
        let stored = stored.replace('\\', "/");
        self.ensure_inside(&stored)?;

        match tokio::fs::remove_file(&stored).await {
            Ok(()) => {
                tracing::debug!(path = %stored, "Removed media file");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(MediaError::Remove {
                path: stored,
                source,
            }),
        }
    }

    /// Best-effort removal used after a successful replace or delete
    pub async fn discard(&self, stored: &str) {
        if let Err(e) = self.remove(stored).await {
            tracing::warn!(error = %e, "Failed to remove old media file");
        }
    }

    fn ensure_inside(&self, stored: &str) -> Result<(), MediaError> {
        let inside = stored
            .strip_prefix(&self.root)
            .is_some_and(|rest| rest.starts_with('/'));
        let escapes = stored.split('/').any(|segment| segment == "..");
        if inside && !escapes {
            Ok(())
        } else {
            Err(MediaError::OutsideRoot(stored.to_owned()))
        }
    }
}

/// `default.*` placeholders shipped with the deployment
pub fn is_default_asset(stored: &str) -> bool {
    stored
        .rsplit(['/', '\\'])
        .next()
        .is_some_and(|name| name.starts_with("default."))
}

/// Lower-cased extension of an uploaded file name, `bin` when absent
pub fn extension(original_name: &str) -> String {
    match original_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) => {
            ext.to_ascii_lowercase()
        }
        _ => "bin".to_owned(),
    }
}

/// File stem reduced to `[A-Za-z0-9_-]`, at most 64 characters
pub fn sanitized_stem(original_name: &str) -> String {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);
    let stem = base.rsplit_once('.').map_or(base, |(stem, _)| stem);
    safe_segment(stem)
}

/// Any text reduced to a file-name segment of `[A-Za-z0-9_-]`, at most 64
/// characters, `file` when nothing survives
pub fn safe_segment(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect();

    if cleaned.is_empty() {
        "file".to_owned()
    } else {
        cleaned
    }
}

/// `parts` joined by `_`, plus the extension of the uploaded file
///
/// ```
/// use platform::media::upload_name;
/// assert_eq!(upload_name(&["cfc", "1700000000000", "abc"], "x.PNG"), "cfc_1700000000000_abc.png");
/// ```
pub fn upload_name(parts: &[&str], original_name: &str) -> String {
    format!("{}.{}", parts.join("_"), extension(original_name))
}

/// Absolute URL for a stored path
pub fn public_url(host: &str, stored: &str) -> String {
    let stored = stored.replace('\\', "/");
    let mut path = stored.trim_start_matches('/');
    while let Some(rest) = path.strip_prefix("./") {
        path = rest.trim_start_matches('/');
    }
    format!("{}/{}", host.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> MediaStore {
        MediaStore::new(dir.path().to_string_lossy().into_owned())
    }

    #[tokio::test]
    async fn test_save_creates_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let stored = store.save("banner", "bn_a.png", b"png").await.unwrap();
        assert!(stored.ends_with("/banner/bn_a.png"));
        assert_eq!(tokio::fs::read(&stored).await.unwrap(), b"png");
    }

    #[tokio::test]
    async fn test_remove_existing_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let stored = store.save("logo", "logo_small_1.png", b"x").await.unwrap();
        assert!(store.remove(&stored).await.unwrap());
        assert!(!store.remove(&stored).await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_never_deletes_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let stored = store
            .save("cake-face-category", "default.png", b"x")
            .await
            .unwrap();
        assert!(!store.remove(&stored).await.unwrap());
        assert!(Path::new(&stored).exists());
    }

    #[tokio::test]
    async fn test_remove_outside_root_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let escape = format!("{}/../secret.txt", store.root());
        assert!(matches!(
            store.remove(&escape).await,
            Err(MediaError::OutsideRoot(_))
        ));
        assert!(matches!(
            store.remove("/etc/passwd").await,
            Err(MediaError::OutsideRoot(_))
        ));
    }

    #[test]
    fn test_stored_path_normalizes_root() {
        let store = MediaStore::new("public\\image\\");
        assert_eq!(
            store.stored_path("avatar", "default.webp"),
            "public/image/avatar/default.webp"
        );
    }

    #[test]
    fn test_dot_slash_root_is_dropped() {
        let store = MediaStore::new("./uploads/");
        assert_eq!(store.root(), "uploads");
        let stored = store.stored_path("banner", "bn_a.png");
        assert_eq!(stored, "uploads/banner/bn_a.png");
        assert_eq!(
            public_url("http://api.test", &stored),
            "http://api.test/uploads/banner/bn_a.png"
        );
        assert_eq!(MediaStore::new("./").root(), ".");
        assert_eq!(
            public_url("http://api.test/", "./logo/a.png"),
            "http://api.test/logo/a.png"
        );
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension("photo.JPG"), "jpg");
        assert_eq!(extension("archive.tar.gz"), "gz");
        assert_eq!(extension("noext"), "bin");
        assert_eq!(extension("weird.p/ng"), "bin");
    }

    #[test]
    fn test_sanitized_stem() {
        assert_eq!(sanitized_stem("summer sale!.png"), "summer_sale_");
        assert_eq!(sanitized_stem("../../etc/passwd"), "passwd");
        assert_eq!(sanitized_stem(".png"), "file");
        assert_eq!(safe_segment("Bob.Baker/01"), "Bob_Baker_01");
    }

    #[test]
    fn test_public_url() {
        assert_eq!(
            public_url("https://api.example.com/", "public\\image\\banner\\a.png"),
            "https://api.example.com/public/image/banner/a.png"
        );
    }

    #[test]
    fn test_is_default_asset() {
        assert!(is_default_asset("public/image/avatar/default.webp"));
        assert!(!is_default_asset("public/image/avatar/avatar_bob_1.webp"));
    }
}
