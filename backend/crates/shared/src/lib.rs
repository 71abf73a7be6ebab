//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by the
//! auth and catalog crates:
//! - Common error types and result aliases
//! - The JSON response envelope every endpoint answers with
//! - List query primitives (paging, sorting, active filter)
//! - Typed UUID identifiers
//! - Body extractors whose rejections use the envelope
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
#[cfg(feature = "axum")]
pub mod extract;
pub mod id;
pub mod query;
pub mod response;
