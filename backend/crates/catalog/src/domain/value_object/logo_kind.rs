//! Logo Variants
//!
//! Each variant is stored as its own setting row, `{kind}_logo`. Uploading
//! the small logo also points `ico_logo` at the same file.

use kernel::error::app_error::{AppError, AppResult};

/// Setting holding the favicon path
pub const ICO_LOGO: &str = "ico_logo";

/// Setting holding free-form SEO markup; its value is not a media path
pub const SEO_CONTENT: &str = "seo_content";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoKind {
    Small,
    Large,
}

impl LogoKind {
    pub fn parse(raw: &str) -> AppResult<Self> {
        match raw.trim() {
            "small" => Ok(LogoKind::Small),
            "large" => Ok(LogoKind::Large),
            other => Err(AppError::bad_request(format!(
                "Logo type must be 'small' or 'large', got '{other}'"
            ))),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            LogoKind::Small => "small",
            LogoKind::Large => "large",
        }
    }

    pub const fn setting_name(&self) -> &'static str {
        match self {
            LogoKind::Small => "small_logo",
            LogoKind::Large => "large_logo",
        }
    }
}
