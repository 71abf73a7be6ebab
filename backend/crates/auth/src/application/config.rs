//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::jwt::JwtCodec;
use platform::media::MediaStore;

/// Media subdirectory for avatars
pub const AVATAR_DIR: &str = "avatar";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Signs and verifies access tokens (`JWT_SECRET`, `JWT_EXPIRATION_TIME`)
    pub access_tokens: JwtCodec,
    /// Signs and verifies refresh tokens (`JWT_REFRESH_SECRET`, `JWT_REFRESH_EXPIRATION_TIME`)
    pub refresh_tokens: JwtCodec,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Where avatars are written
    pub media: MediaStore,
    /// Prefix for absolute avatar URLs
    pub api_host: String,
}

/// Random token secrets with a local media root and host
impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_tokens: JwtCodec::with_random_secret(Duration::from_secs(3600)), // 1 hour
            refresh_tokens: JwtCodec::with_random_secret(Duration::from_secs(7 * 24 * 3600)), // 1 week
            password_pepper: None,
            media: MediaStore::new("public/image"),
            api_host: "http://localhost:3000".to_string(),
        }
    }
}

impl AuthConfig {
    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Stored path of the placeholder avatar
    pub fn default_avatar(&self) -> String {
        self.media.stored_path(AVATAR_DIR, "default.webp")
    }
}
