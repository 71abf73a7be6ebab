//! Site Setting Entity
//!
//! Key/value rows keyed by a unique name (`small_logo`, `large_logo`,
//! `ico_logo`, `seo_content`).

use chrono::{DateTime, Utc};

use crate::domain::value_object::logo_kind::SEO_CONTENT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub id: i32,
    pub name: String,
    pub value: String,
    pub update_date: DateTime<Utc>,
    pub update_by: String,
}

impl Setting {
    /// Every setting except the SEO markup stores a media path
    pub fn holds_media_path(&self) -> bool {
        self.name != SEO_CONTENT
    }
}
