//! Entities

pub mod audit;
pub mod banner;
pub mod cake_face;
pub mod cake_face_option;
pub mod category;
pub mod sample_asset;
pub mod setting;
