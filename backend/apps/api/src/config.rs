//! Server Configuration
//!
//! Everything the binary reads from the environment, parsed once at
//! startup. Missing optional values fall back to local-development defaults.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use catalog::CatalogConfig;
use platform::duration::parse_duration;
use platform::jwt::JwtCodec;
use platform::media::MediaStore;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MEDIA_ROOT: &str = "public/image";
const DEFAULT_API_HOST: &str = "http://localhost:3000";
const DEFAULT_ORIGINS: &str = "http://localhost:3001,http://127.0.0.1:3001";
const DEFAULT_ACCESS_TTL: &str = "1h";
const DEFAULT_REFRESH_TTL: &str = "7d";

/// 10 MiB
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// One signing secret with its token lifetime
#[derive(Clone)]
pub struct TokenSettings {
    /// `None` means a random per-process secret (debug builds only)
    pub secret: Option<String>,
    pub ttl: Duration,
}

impl TokenSettings {
    fn codec(&self) -> anyhow::Result<JwtCodec> {
        match &self.secret {
            Some(secret) => Ok(JwtCodec::new(secret.as_bytes(), self.ttl)?),
            None => Ok(JwtCodec::with_random_secret(self.ttl)),
        }
    }
}

#[derive(Clone)]
pub struct BootstrapAdmin {
    pub user_name: String,
    pub password: String,
}

#[derive(Clone)]
pub struct ApiConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub max_upload_bytes: usize,
    pub media_root: String,
    pub api_host: String,
    pub access_token: TokenSettings,
    pub refresh_token: TokenSettings,
    pub password_pepper: Option<String>,
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), !cfg!(debug_assertions))
    }

    /// Parse from any key lookup. With `require_secrets`, both JWT secrets
    /// must be set.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        require_secrets: bool,
    ) -> anyhow::Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let database_url = get("DATABASE_URL").context("DATABASE_URL must be set")?;

        let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid DATABASE_MAX_CONNECTIONS `{raw}`"))?,
            None => 5,
        };

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned())
            .parse()
            .context("invalid BIND_ADDR")?;

        let max_upload_bytes = match get("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid MAX_UPLOAD_BYTES `{raw}`"))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ORIGINS.to_owned())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect();

        let token = |secret_key: &str, ttl_key: &str, default_ttl: &str| -> anyhow::Result<_> {
            let secret = get(secret_key);
            if secret.is_none() && require_secrets {
                bail!("{secret_key} must be set in production");
            }
            let raw_ttl = get(ttl_key).unwrap_or_else(|| default_ttl.to_owned());
            let ttl = parse_duration(&raw_ttl).with_context(|| format!("invalid {ttl_key}"))?;
            Ok(TokenSettings { secret, ttl })
        };

        let bootstrap_admin = match (
            get("BOOTSTRAP_ADMIN_USERNAME"),
            lookup("BOOTSTRAP_ADMIN_PASSWORD").filter(|p| !p.is_empty()),
        ) {
            (Some(user_name), Some(password)) => Some(BootstrapAdmin {
                user_name,
                password,
            }),
            (None, None) => None,
            _ => bail!("BOOTSTRAP_ADMIN_USERNAME and BOOTSTRAP_ADMIN_PASSWORD go together"),
        };

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            frontend_origins,
            max_upload_bytes,
            media_root: get("MEDIA_UPLOAD_PATH").unwrap_or_else(|| DEFAULT_MEDIA_ROOT.to_owned()),
            api_host: get("API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_owned()),
            access_token: token("JWT_SECRET", "JWT_EXPIRATION_TIME", DEFAULT_ACCESS_TTL)?,
            refresh_token: token(
                "JWT_REFRESH_SECRET",
                "JWT_REFRESH_EXPIRATION_TIME",
                DEFAULT_REFRESH_TTL,
            )?,
            password_pepper: lookup("PASSWORD_PEPPER").filter(|p| !p.is_empty()),
            bootstrap_admin,
        })
    }

    pub fn media(&self) -> MediaStore {
        MediaStore::new(self.media_root.as_str())
    }

    pub fn auth_config(&self) -> anyhow::Result<AuthConfig> {
        Ok(AuthConfig {
            access_tokens: self.access_token.codec()?,
            refresh_tokens: self.refresh_token.codec()?,
            password_pepper: self.password_pepper.clone().map(String::into_bytes),
            media: self.media(),
            api_host: self.api_host.clone(),
        })
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            media: self.media(),
            api_host: self.api_host.clone(),
        }
    }
}
