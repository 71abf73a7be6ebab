//! Cake Face Entity
//!
//! A design: thumbnail, editor config file and free-form detail/content.
//! The category link is nullable; deleting a category orphans its designs.

use kernel::id::CakeFaceId;

use crate::domain::entity::audit::Audit;
use crate::domain::value_object::item_name::ItemName;

#[derive(Debug, Clone)]
pub struct CakeFace {
    pub id: CakeFaceId,
    pub name: ItemName,
    pub detail: String,
    pub content: String,
    pub thumbnail: String,
    pub config_file_path: String,
    pub is_active: bool,
    pub category_id: Option<i32>,
    pub audit: Audit,
}

/// Validated form fields for a new cake face
#[derive(Debug, Clone)]
pub struct NewCakeFace {
    pub name: ItemName,
    pub detail: String,
    pub content: String,
    pub is_active: bool,
    pub category_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct CakeFacePatch {
    pub name: Option<ItemName>,
    pub detail: Option<String>,
    pub content: Option<String>,
    pub is_active: Option<bool>,
    pub category_id: Option<i32>,
}

impl CakeFace {
    pub fn new(
        fields: NewCakeFace,
        thumbnail: String,
        config_file_path: String,
        creator: &str,
    ) -> Self {
        Self {
            id: CakeFaceId::new(),
            name: fields.name,
            detail: fields.detail,
            content: fields.content,
            thumbnail,
            config_file_path,
            is_active: fields.is_active,
            category_id: Some(fields.category_id),
            audit: Audit::new(creator),
        }
    }

    pub fn apply(&mut self, patch: CakeFacePatch, updater: &str) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(detail) = patch.detail {
            self.detail = detail;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = Some(category_id);
        }
        self.audit.touch(updater);
    }
}
