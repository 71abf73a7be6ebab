use kernel::query::{Listing, contains_pattern};

use super::{AuditRow, PgCatalogRepository, order_by};
use crate::domain::entity::sample_asset::{NewSampleAsset, SampleAsset, SampleKind};
use crate::domain::repository::{CatalogFilter, SampleAssetRepository};
use crate::domain::value_object::item_name::ItemName;
use crate::error::CatalogResult;

// Table names come from SampleKind::table, never from input.
impl SampleAssetRepository for PgCatalogRepository {
    async fn insert_sample(
        &self,
        kind: SampleKind,
        sample: &NewSampleAsset,
    ) -> CatalogResult<SampleAsset> {
        let sql = format!(
            r#"
            INSERT INTO {} (
                name,
                image,
                is_active,
                create_date,
                create_by,
                update_date,
                update_by
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
            kind.table()
        );
        let (id,): (i32,) = sqlx::query_as(&sql)
            .bind(sample.name.as_str())
            .bind(&sample.image)
            .bind(sample.is_active)
            .bind(sample.audit.create_date)
            .bind(&sample.audit.create_by)
            .bind(sample.audit.update_date)
            .bind(&sample.audit.update_by)
            .fetch_one(&self.pool)
            .await?;

        Ok(sample.clone().with_id(kind, id))
    }

    async fn find_sample(&self, kind: SampleKind, id: i32) -> CatalogResult<Option<SampleAsset>> {
        let sql = format!(
            r#"
            SELECT id, name, image, is_active, create_date, create_by, update_date, update_by
            FROM {}
            WHERE id = $1
            "#,
            kind.table()
        );
        let row = sqlx::query_as::<_, SampleRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.into_sample(kind)))
    }

    async fn update_sample(&self, sample: &SampleAsset) -> CatalogResult<bool> {
        let sql = format!(
            r#"
            UPDATE {} SET
                name = $2,
                image = $3,
                is_active = $4,
                update_date = $5,
                update_by = $6
            WHERE id = $1
            "#,
            sample.kind.table()
        );
        let result = sqlx::query(&sql)
            .bind(sample.id)
            .bind(sample.name.as_str())
            .bind(&sample.image)
            .bind(sample.is_active)
            .bind(sample.audit.update_date)
            .bind(&sample.audit.update_by)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_sample(
        &self,
        kind: SampleKind,
        id: i32,
    ) -> CatalogResult<Option<SampleAsset>> {
        let sql = format!(
            r#"
            DELETE FROM {}
            WHERE id = $1
            RETURNING id, name, image, is_active, create_date, create_by, update_date, update_by
            "#,
            kind.table()
        );
        let row = sqlx::query_as::<_, SampleRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.into_sample(kind)))
    }

    async fn list_samples(
        &self,
        kind: SampleKind,
        filter: &CatalogFilter,
    ) -> CatalogResult<Listing<SampleAsset>> {
        let name = filter.name.as_deref().map(contains_pattern);
        let active = filter.active.as_option();

        let sql = format!(
            r#"
            SELECT id, name, image, is_active, create_date, create_by, update_date, update_by
            FROM {}
            WHERE ($1::text IS NULL OR name ILIKE $1)
              AND ($2::boolean IS NULL OR is_active = $2)
            ORDER BY is_active DESC, {}, id ASC
            LIMIT $3 OFFSET $4
            "#,
            kind.table(),
            order_by(filter)
        );
        let rows = sqlx::query_as::<_, SampleRow>(&sql)
            .bind(name.as_deref())
            .bind(active)
            .bind(filter.page.limit)
            .bind(filter.page.offset())
            .fetch_all(&self.pool)
            .await?;

        let count_sql = format!(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE $2::boolean IS NULL OR is_active = $2),
                COUNT(*) FILTER (WHERE is_active)
            FROM {}
            WHERE ($1::text IS NULL OR name ILIKE $1)
            "#,
            kind.table()
        );
        let (total, total_active): (i64, i64) = sqlx::query_as(&count_sql)
            .bind(name.as_deref())
            .bind(active)
            .fetch_one(&self.pool)
            .await?;

        Ok(Listing {
            data: rows.into_iter().map(|r| r.into_sample(kind)).collect(),
            total,
            total_active,
            limit: filter.page.limit,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SampleRow {
    id: i32,
    name: String,
    image: String,
    is_active: bool,
    #[sqlx(flatten)]
    audit: AuditRow,
}

impl SampleRow {
    fn into_sample(self, kind: SampleKind) -> SampleAsset {
        SampleAsset {
            id: self.id,
            kind,
            name: ItemName::from_db(self.name),
            image: self.image,
            is_active: self.is_active,
            audit: self.audit.into_audit(),
        }
    }
}
