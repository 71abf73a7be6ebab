//! Sample Background / Sample Pattern Entities
//!
//! Two tables with the same shape. [`SampleKind`] selects the table, the
//! media subdirectory and the messages.

use crate::domain::entity::audit::Audit;
use crate::domain::value_object::item_name::ItemName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Background,
    Pattern,
}

impl SampleKind {
    pub const fn table(&self) -> &'static str {
        match self {
            SampleKind::Background => "sample_background",
            SampleKind::Pattern => "sample_pattern",
        }
    }

    pub const fn media_dir(&self) -> &'static str {
        match self {
            SampleKind::Background => "sample-background",
            SampleKind::Pattern => "sample-pattern",
        }
    }

    /// Upload name prefix
    pub const fn prefix(&self) -> &'static str {
        match self {
            SampleKind::Background => "sb",
            SampleKind::Pattern => "sp",
        }
    }

    pub const fn not_found(&self) -> &'static str {
        match self {
            SampleKind::Background => "Sample Background Not Found",
            SampleKind::Pattern => "Sample Pattern Not Found",
        }
    }

    pub const fn created_message(&self) -> &'static str {
        match self {
            SampleKind::Background => "Create Sample Background successfully",
            SampleKind::Pattern => "Create Sample Pattern successfully",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SampleAsset {
    pub id: i32,
    pub kind: SampleKind,
    pub name: ItemName,
    pub image: String,
    pub is_active: bool,
    pub audit: Audit,
}

#[derive(Debug, Clone)]
pub struct NewSampleAsset {
    pub name: ItemName,
    pub image: String,
    pub is_active: bool,
    pub audit: Audit,
}

#[derive(Debug, Clone, Default)]
pub struct SampleAssetPatch {
    pub name: Option<ItemName>,
    pub is_active: Option<bool>,
}

impl NewSampleAsset {
    pub fn with_id(self, kind: SampleKind, id: i32) -> SampleAsset {
        SampleAsset {
            id,
            kind,
            name: self.name,
            image: self.image,
            is_active: self.is_active,
            audit: self.audit,
        }
    }
}

impl SampleAsset {
    pub fn apply(&mut self, patch: SampleAssetPatch, updater: &str) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.audit.touch(updater);
    }
}
