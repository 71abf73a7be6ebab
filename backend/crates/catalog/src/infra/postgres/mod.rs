//! PostgreSQL Repository Implementations
//!
//! One [`PgCatalogRepository`] implements every catalog repository trait;
//! each resource lives in its own submodule.
//!
//! List queries splice `ORDER BY` from `SortField::column` and
//! `SortOrder::as_sql`, both closed sets of literals. Everything
//! user-supplied is bound.

mod banner;
mod cake_face;
mod cake_face_option;
mod category;
mod sample_asset;
mod setting;

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::audit::Audit;
use crate::domain::repository::CatalogFilter;

/// PostgreSQL-backed catalog repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `<column> <ASC|DESC>`
fn order_by(filter: &CatalogFilter) -> String {
    format!("{} {}", filter.sort_by.column(), filter.sort.as_sql())
}

#[derive(sqlx::FromRow)]
struct AuditRow {
    create_date: DateTime<Utc>,
    create_by: String,
    update_date: DateTime<Utc>,
    update_by: String,
}

impl AuditRow {
    fn into_audit(self) -> Audit {
        Audit {
            create_date: self.create_date,
            create_by: self.create_by,
            update_date: self.update_date,
            update_by: self.update_by,
        }
    }
}
