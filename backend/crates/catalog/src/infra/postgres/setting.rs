use chrono::{DateTime, Utc};

use super::PgCatalogRepository;
use crate::domain::entity::setting::Setting;
use crate::domain::repository::SettingRepository;
use crate::error::CatalogResult;

impl SettingRepository for PgCatalogRepository {
    async fn find_setting(&self, name: &str) -> CatalogResult<Option<Setting>> {
        let row = sqlx::query_as::<_, SettingRow>(
            r#"
            SELECT id, name, value, update_date, update_by
            FROM setting
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SettingRow::into_setting))
    }

    async fn upsert_setting(
        &self,
        name: &str,
        value: &str,
        updater: &str,
    ) -> CatalogResult<Setting> {
        let row = sqlx::query_as::<_, SettingRow>(
            r#"
            INSERT INTO setting (name, value, update_date, update_by)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (name) DO UPDATE SET
                value = EXCLUDED.value,
                update_date = EXCLUDED.update_date,
                update_by = EXCLUDED.update_by
            RETURNING id, name, value, update_date, update_by
            "#,
        )
        .bind(name)
        .bind(value)
        .bind(Utc::now())
        .bind(updater)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_setting())
    }

    async fn list_settings(&self) -> CatalogResult<Vec<Setting>> {
        let rows = sqlx::query_as::<_, SettingRow>(
            r#"
            SELECT id, name, value, update_date, update_by
            FROM setting
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SettingRow::into_setting).collect())
    }
}

#[derive(sqlx::FromRow)]
struct SettingRow {
    id: i32,
    name: String,
    value: String,
    update_date: DateTime<Utc>,
    update_by: String,
}

impl SettingRow {
    fn into_setting(self) -> Setting {
        Setting {
            id: self.id,
            name: self.name,
            value: self.value,
            update_date: self.update_date,
            update_by: self.update_by,
        }
    }
}
