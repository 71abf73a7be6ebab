//! Cake Face Option Entity
//!
//! A decoration variant of one cake face. Options are deleted together with
//! their cake face.

use kernel::id::{CakeFaceId, CakeFaceOptionId};

use crate::domain::entity::audit::Audit;
use crate::domain::value_object::item_name::ItemName;

#[derive(Debug, Clone)]
pub struct CakeFaceOption {
    pub id: CakeFaceOptionId,
    pub name: ItemName,
    pub detail: String,
    pub image: String,
    pub is_active: bool,
    pub view_amount: i64,
    pub download_amount: i64,
    pub cake_face_id: CakeFaceId,
    pub audit: Audit,
}

#[derive(Debug, Clone)]
pub struct NewCakeFaceOption {
    pub name: ItemName,
    pub detail: String,
    pub is_active: bool,
    pub cake_face_id: CakeFaceId,
}

#[derive(Debug, Clone, Default)]
pub struct CakeFaceOptionPatch {
    pub name: Option<ItemName>,
    pub detail: Option<String>,
    pub is_active: Option<bool>,
    pub cake_face_id: Option<CakeFaceId>,
}

impl CakeFaceOption {
    pub fn new(fields: NewCakeFaceOption, image: String, creator: &str) -> Self {
        Self {
            id: CakeFaceOptionId::new(),
            name: fields.name,
            detail: fields.detail,
            image,
            is_active: fields.is_active,
            view_amount: 0,
            download_amount: 0,
            cake_face_id: fields.cake_face_id,
            audit: Audit::new(creator),
        }
    }

    pub fn apply(&mut self, patch: CakeFaceOptionPatch, updater: &str) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(detail) = patch.detail {
            self.detail = detail;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        if let Some(cake_face_id) = patch.cake_face_id {
            self.cake_face_id = cake_face_id;
        }
        self.audit.touch(updater);
    }
}
