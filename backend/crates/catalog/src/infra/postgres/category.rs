use kernel::query::{Listing, contains_pattern};

use super::{AuditRow, PgCatalogRepository, order_by};
use crate::domain::entity::category::{Category, NewCategory};
use crate::domain::repository::{CatalogFilter, CategoryRepository};
use crate::domain::value_object::item_name::ItemName;
use crate::error::CatalogResult;

impl CategoryRepository for PgCatalogRepository {
    async fn insert_category(&self, category: &NewCategory) -> CatalogResult<Category> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO cake_face_category (
                name,
                thumbnail,
                is_active,
                create_date,
                create_by,
                update_date,
                update_by
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(category.name.as_str())
        .bind(&category.thumbnail)
        .bind(category.is_active)
        .bind(category.audit.create_date)
        .bind(&category.audit.create_by)
        .bind(category.audit.update_date)
        .bind(&category.audit.update_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(category.clone().with_id(id))
    }

    async fn find_category(&self, id: i32) -> CatalogResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, thumbnail, is_active, create_date, create_by, update_date, update_by
            FROM cake_face_category
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CategoryRow::into_category))
    }

    async fn update_category(&self, category: &Category) -> CatalogResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE cake_face_category SET
                name = $2,
                thumbnail = $3,
                is_active = $4,
                update_date = $5,
                update_by = $6
            WHERE id = $1
            "#,
        )
        .bind(category.id)
        .bind(category.name.as_str())
        .bind(&category.thumbnail)
        .bind(category.is_active)
        .bind(category.audit.update_date)
        .bind(&category.audit.update_by)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_category(&self, id: i32) -> CatalogResult<Option<Category>> {
        // cake_face.category_id is ON DELETE SET NULL
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            DELETE FROM cake_face_category
            WHERE id = $1
            RETURNING id, name, thumbnail, is_active, create_date, create_by, update_date, update_by
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CategoryRow::into_category))
    }

    async fn list_categories(&self, filter: &CatalogFilter) -> CatalogResult<Listing<Category>> {
        let name = filter.name.as_deref().map(contains_pattern);
        let active = filter.active.as_option();

        let sql = format!(
            r#"
            SELECT id, name, thumbnail, is_active, create_date, create_by, update_date, update_by
            FROM cake_face_category
            WHERE ($1::text IS NULL OR name ILIKE $1)
              AND ($2::boolean IS NULL OR is_active = $2)
            ORDER BY {}, id ASC
            LIMIT $3 OFFSET $4
            "#,
            order_by(filter)
        );
        let rows = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(name.as_deref())
            .bind(active)
            .bind(filter.page.limit)
            .bind(filter.page.offset())
            .fetch_all(&self.pool)
            .await?;

        let (total, total_active): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE $2::boolean IS NULL OR is_active = $2),
                COUNT(*) FILTER (WHERE is_active)
            FROM cake_face_category
            WHERE ($1::text IS NULL OR name ILIKE $1)
            "#,
        )
        .bind(name.as_deref())
        .bind(active)
        .fetch_one(&self.pool)
        .await?;

        Ok(Listing {
            data: rows.into_iter().map(CategoryRow::into_category).collect(),
            total,
            total_active,
            limit: filter.page.limit,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i32,
    name: String,
    thumbnail: String,
    is_active: bool,
    #[sqlx(flatten)]
    audit: AuditRow,
}

impl CategoryRow {
    fn into_category(self) -> Category {
        Category {
            id: self.id,
            name: ItemName::from_db(self.name),
            thumbnail: self.thumbnail,
            is_active: self.is_active,
            audit: self.audit.into_audit(),
        }
    }
}
