use kernel::id::{CakeFaceId, CakeFaceOptionId};
use kernel::query::{Listing, contains_pattern};
use uuid::Uuid;

use super::{AuditRow, PgCatalogRepository, order_by};
use crate::domain::entity::cake_face_option::CakeFaceOption;
use crate::domain::repository::{CakeFaceOptionFilter, CakeFaceOptionRepository};
use crate::domain::value_object::counter::Counter;
use crate::domain::value_object::item_name::ItemName;
use crate::error::CatalogResult;

const OPTION_COLUMNS: &str = r#"
    id,
    name,
    detail,
    image,
    is_active,
    view_amount,
    download_amount,
    cake_face_id,
    create_date,
    create_by,
    update_date,
    update_by
"#;

impl CakeFaceOptionRepository for PgCatalogRepository {
    async fn insert_option(&self, option: &CakeFaceOption) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO cake_face_option (
                id,
                name,
                detail,
                image,
                is_active,
                view_amount,
                download_amount,
                cake_face_id,
                create_date,
                create_by,
                update_date,
                update_by
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(option.id.as_uuid())
        .bind(option.name.as_str())
        .bind(&option.detail)
        .bind(&option.image)
        .bind(option.is_active)
        .bind(option.view_amount)
        .bind(option.download_amount)
        .bind(option.cake_face_id.as_uuid())
        .bind(option.audit.create_date)
        .bind(&option.audit.create_by)
        .bind(option.audit.update_date)
        .bind(&option.audit.update_by)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_option(&self, id: CakeFaceOptionId) -> CatalogResult<Option<CakeFaceOption>> {
        let sql = format!("SELECT {OPTION_COLUMNS} FROM cake_face_option WHERE id = $1");
        let row = sqlx::query_as::<_, OptionRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(OptionRow::into_option))
    }

    async fn update_option(&self, option: &CakeFaceOption) -> CatalogResult<bool> {
        // counters are only ever touched by increment_counter
        let result = sqlx::query(
            r#"
            UPDATE cake_face_option SET
                name = $2,
                detail = $3,
                image = $4,
                is_active = $5,
                cake_face_id = $6,
                update_date = $7,
                update_by = $8
            WHERE id = $1
            "#,
        )
        .bind(option.id.as_uuid())
        .bind(option.name.as_str())
        .bind(&option.detail)
        .bind(&option.image)
        .bind(option.is_active)
        .bind(option.cake_face_id.as_uuid())
        .bind(option.audit.update_date)
        .bind(&option.audit.update_by)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_option(
        &self,
        id: CakeFaceOptionId,
    ) -> CatalogResult<Option<CakeFaceOption>> {
        let sql = format!("DELETE FROM cake_face_option WHERE id = $1 RETURNING {OPTION_COLUMNS}");
        let row = sqlx::query_as::<_, OptionRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(OptionRow::into_option))
    }

    async fn list_options(
        &self,
        filter: &CakeFaceOptionFilter,
    ) -> CatalogResult<Listing<CakeFaceOption>> {
        let common = &filter.common;
        let name = common.name.as_deref().map(contains_pattern);
        let active = common.active.as_option();
        let cake_face_id = filter.cake_face_id.map(CakeFaceId::into_uuid);

        let sql = format!(
            r#"
            SELECT {OPTION_COLUMNS}
            FROM cake_face_option
            WHERE ($1::text IS NULL OR name ILIKE $1)
              AND ($2::uuid IS NULL OR cake_face_id = $2)
              AND ($3::boolean IS NULL OR is_active = $3)
            ORDER BY {}, id ASC
            LIMIT $4 OFFSET $5
            "#,
            order_by(common)
        );
        let rows = sqlx::query_as::<_, OptionRow>(&sql)
            .bind(name.as_deref())
            .bind(cake_face_id)
            .bind(active)
            .bind(common.page.limit)
            .bind(common.page.offset())
            .fetch_all(&self.pool)
            .await?;

        let (total, total_active): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE $3::boolean IS NULL OR is_active = $3),
                COUNT(*) FILTER (WHERE is_active)
            FROM cake_face_option
            WHERE ($1::text IS NULL OR name ILIKE $1)
              AND ($2::uuid IS NULL OR cake_face_id = $2)
            "#,
        )
        .bind(name.as_deref())
        .bind(cake_face_id)
        .bind(active)
        .fetch_one(&self.pool)
        .await?;

        Ok(Listing {
            data: rows.into_iter().map(OptionRow::into_option).collect(),
            total,
            total_active,
            limit: common.page.limit,
        })
    }

    async fn increment_counter(
        &self,
        id: CakeFaceOptionId,
        counter: Counter,
    ) -> CatalogResult<Option<CakeFaceOption>> {
        let column = counter.column();
        let sql = format!(
            "UPDATE cake_face_option SET {column} = {column} + 1 WHERE id = $1 RETURNING {OPTION_COLUMNS}"
        );
        let row = sqlx::query_as::<_, OptionRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(OptionRow::into_option))
    }
}

#[derive(sqlx::FromRow)]
struct OptionRow {
    id: Uuid,
    name: String,
    detail: String,
    image: String,
    is_active: bool,
    view_amount: i64,
    download_amount: i64,
    cake_face_id: Uuid,
    #[sqlx(flatten)]
    audit: AuditRow,
}

impl OptionRow {
    fn into_option(self) -> CakeFaceOption {
        CakeFaceOption {
            id: CakeFaceOptionId::from_uuid(self.id),
            name: ItemName::from_db(self.name),
            detail: self.detail,
            image: self.image,
            is_active: self.is_active,
            view_amount: self.view_amount,
            download_amount: self.download_amount,
            cake_face_id: CakeFaceId::from_uuid(self.cake_face_id),
            audit: self.audit.into_audit(),
        }
    }
}
