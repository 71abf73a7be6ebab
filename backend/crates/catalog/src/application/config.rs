//! Application Configuration
//!
//! Configuration for the Catalog application layer.

use platform::media::{MediaStore, public_url};

/// Media subdirectory per resource
pub mod dirs {
    pub const CATEGORY: &str = "cake-face-category";
    pub const CAKE_FACE: &str = "cake-face";
    pub const CAKE_FACE_OPTION: &str = "cake-face-option";
    pub const BANNER: &str = "banner";
    pub const LOGO: &str = "logo";
}

/// Catalog application configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Where uploads are written (`MEDIA_UPLOAD_PATH`)
    pub media: MediaStore,
    /// Prefix for absolute media URLs (`API_HOST`)
    pub api_host: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            media: MediaStore::new("public/image"),
            api_host: "http://localhost:3000".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Absolute URL for a stored path
    pub fn url(&self, stored: &str) -> String {
        public_url(&self.api_host, stored)
    }

    /// Placeholder used when a category is created without a thumbnail
    pub fn default_category_thumbnail(&self) -> String {
        self.media.stored_path(dirs::CATEGORY, "default.png")
    }
}
