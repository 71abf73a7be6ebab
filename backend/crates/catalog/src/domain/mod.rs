//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    banner::Banner, cake_face::CakeFace, cake_face_option::CakeFaceOption, category::Category,
    sample_asset::SampleAsset, setting::Setting,
};
pub use repository::CatalogRepository;
