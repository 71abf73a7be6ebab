use kernel::id::CakeFaceId;
use kernel::query::{Listing, contains_pattern};
use uuid::Uuid;

use super::{AuditRow, PgCatalogRepository, order_by};
use crate::domain::entity::cake_face::CakeFace;
use crate::domain::repository::{CakeFaceFilter, CakeFaceRepository, RemovedCakeFace};
use crate::domain::value_object::item_name::ItemName;
use crate::error::CatalogResult;

impl CakeFaceRepository for PgCatalogRepository {
    async fn insert_cake_face(&self, cake_face: &CakeFace) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO cake_face (
                id,
                name,
                detail,
                content,
                thumbnail,
                config_file_path,
                is_active,
                category_id,
                create_date,
                create_by,
                update_date,
                update_by
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(cake_face.id.as_uuid())
        .bind(cake_face.name.as_str())
        .bind(&cake_face.detail)
        .bind(&cake_face.content)
        .bind(&cake_face.thumbnail)
        .bind(&cake_face.config_file_path)
        .bind(cake_face.is_active)
        .bind(cake_face.category_id)
        .bind(cake_face.audit.create_date)
        .bind(&cake_face.audit.create_by)
        .bind(cake_face.audit.update_date)
        .bind(&cake_face.audit.update_by)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_cake_face(&self, id: CakeFaceId) -> CatalogResult<Option<CakeFace>> {
        let row = sqlx::query_as::<_, CakeFaceRow>(
            r#"
            SELECT
                id,
                name,
                detail,
                content,
                thumbnail,
                config_file_path,
                is_active,
                category_id,
                create_date,
                create_by,
                update_date,
                update_by
            FROM cake_face
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CakeFaceRow::into_cake_face))
    }

    async fn update_cake_face(&self, cake_face: &CakeFace) -> CatalogResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE cake_face SET
                name = $2,
                detail = $3,
                content = $4,
                thumbnail = $5,
                config_file_path = $6,
                is_active = $7,
                category_id = $8,
                update_date = $9,
                update_by = $10
            WHERE id = $1
            "#,
        )
        .bind(cake_face.id.as_uuid())
        .bind(cake_face.name.as_str())
        .bind(&cake_face.detail)
        .bind(&cake_face.content)
        .bind(&cake_face.thumbnail)
        .bind(&cake_face.config_file_path)
        .bind(cake_face.is_active)
        .bind(cake_face.category_id)
        .bind(cake_face.audit.update_date)
        .bind(&cake_face.audit.update_by)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_cake_face(&self, id: CakeFaceId) -> CatalogResult<Option<RemovedCakeFace>> {
        let mut tx = self.pool.begin().await?;

        let option_images: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT image
            FROM cake_face_option
            WHERE cake_face_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_all(&mut *tx)
        .await?;

        // cake_face_option.cake_face_id is ON DELETE CASCADE
        let row = sqlx::query_as::<_, CakeFaceRow>(
            r#"
            DELETE FROM cake_face
            WHERE id = $1
            RETURNING
                id,
                name,
                detail,
                content,
                thumbnail,
                config_file_path,
                is_active,
                category_id,
                create_date,
                create_by,
                update_date,
                update_by
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        tx.commit().await?;

        Ok(Some(RemovedCakeFace {
            cake_face: row.into_cake_face(),
            option_images: option_images.into_iter().map(|(image,)| image).collect(),
        }))
    }

    async fn list_cake_faces(&self, filter: &CakeFaceFilter) -> CatalogResult<Listing<CakeFace>> {
        let common = &filter.common;
        let name = common.name.as_deref().map(contains_pattern);
        let active = common.active.as_option();

        let sql = format!(
            r#"
            SELECT
                id,
                name,
                detail,
                content,
                thumbnail,
                config_file_path,
                is_active,
                category_id,
                create_date,
                create_by,
                update_date,
                update_by
            FROM cake_face
            WHERE ($1::text IS NULL OR name ILIKE $1)
              AND ($2::int IS NULL OR category_id = $2)
              AND ($3::boolean IS NULL OR is_active = $3)
            ORDER BY {}, id ASC
            LIMIT $4 OFFSET $5
            "#,
            order_by(common)
        );
        let rows = sqlx::query_as::<_, CakeFaceRow>(&sql)
            .bind(name.as_deref())
            .bind(filter.category_id)
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
            FROM cake_face
            WHERE ($1::text IS NULL OR name ILIKE $1)
              AND ($2::int IS NULL OR category_id = $2)
            "#,
        )
        .bind(name.as_deref())
        .bind(filter.category_id)
        .bind(active)
        .fetch_one(&self.pool)
        .await?;

        Ok(Listing {
            data: rows.into_iter().map(CakeFaceRow::into_cake_face).collect(),
            total,
            total_active,
            limit: common.page.limit,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CakeFaceRow {
    id: Uuid,
    name: String,
    detail: String,
    content: String,
    thumbnail: String,
    config_file_path: String,
    is_active: bool,
    category_id: Option<i32>,
    #[sqlx(flatten)]
    audit: AuditRow,
}

impl CakeFaceRow {
    fn into_cake_face(self) -> CakeFace {
        CakeFace {
            id: CakeFaceId::from_uuid(self.id),
            name: ItemName::from_db(self.name),
            detail: self.detail,
            content: self.content,
            thumbnail: self.thumbnail,
            config_file_path: self.config_file_path,
            is_active: self.is_active,
            category_id: self.category_id,
            audit: self.audit.into_audit(),
        }
    }
}
