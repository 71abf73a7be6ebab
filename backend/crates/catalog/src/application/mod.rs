//! Application Layer
//!
//! One service per catalog resource, plus the shared form, list and upload
//! helpers they use.

pub mod banner;
pub mod cake_face;
pub mod cake_face_option;
pub mod category;
pub mod config;
pub(crate) mod fields;
pub mod listing;
pub mod media;
pub mod sample_asset;
pub mod setting;

// Re-exports
pub use banner::BannerService;
pub use cake_face::{CakeFaceForm, CakeFaceService};
pub use cake_face_option::{CakeFaceOptionForm, CakeFaceOptionService};
pub use category::{CategoryForm, CategoryService};
pub use config::CatalogConfig;
pub use listing::{CakeFaceListInput, CakeFaceOptionListInput, ListInput};
pub use sample_asset::{SampleAssetForm, SampleAssetService};
pub use setting::{LogoForm, SettingService};
