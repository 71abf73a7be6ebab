//! Catalog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - One service per resource, upload staging
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Resources
//! - Cake-face categories, cake faces and their options
//! - Home-page banners with a contiguous display order
//! - Sample backgrounds and sample patterns
//! - Site settings: logos and SEO content
//!
//! ## Access
//! Reads (and the option view/download counter) are public. Every other
//! write needs an admin access token issued by the `auth` crate.
//!
//! ## Media
//! Uploads are written under the configured media root before the row is
//! stored. A failed write removes the new file; a successful replace or
//! delete removes the old one. Responses always carry absolute URLs.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::CatalogConfig;
pub use domain::repository::CatalogRepository;
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogRepository;
pub use presentation::router::{catalog_router, catalog_router_generic};
