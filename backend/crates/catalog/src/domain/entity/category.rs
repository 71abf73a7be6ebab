//! Cake Face Category Entity

use crate::domain::entity::audit::Audit;
use crate::domain::value_object::item_name::ItemName;

#[derive(Debug, Clone)]
pub struct Category {
    pub id: i32,
    pub name: ItemName,
    /// Stored media path
    pub thumbnail: String,
    pub is_active: bool,
    pub audit: Audit,
}

/// A category before the database assigns its id
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: ItemName,
    pub thumbnail: String,
    pub is_active: bool,
    pub audit: Audit,
}

/// Partial update; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<ItemName>,
    pub is_active: Option<bool>,
}

impl NewCategory {
    pub fn with_id(self, id: i32) -> Category {
        Category {
            id,
            name: self.name,
            thumbnail: self.thumbnail,
            is_active: self.is_active,
            audit: self.audit,
        }
    }
}

impl Category {
    pub fn apply(&mut self, patch: CategoryPatch, updater: &str) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.audit.touch(updater);
    }
}
