use chrono::{DateTime, Utc};

use super::PgCatalogRepository;
use crate::domain::entity::banner::Banner;
use crate::domain::repository::{BannerMoveOutcome, BannerRepository};
use crate::domain::value_object::banner_move::BannerMove;
use crate::error::CatalogResult;

// Writers take this lock first so index bookkeeping never interleaves.
// Plain reads are not blocked.
const LOCK_BANNERS: &str = "LOCK TABLE banner IN EXCLUSIVE MODE";

impl BannerRepository for PgCatalogRepository {
    async fn append_banner(
        &self,
        path: &str,
        create_time: DateTime<Utc>,
    ) -> CatalogResult<Banner> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(LOCK_BANNERS).execute(&mut *tx).await?;

        let row = sqlx::query_as::<_, BannerRow>(
            r#"
            INSERT INTO banner (path, sort_index, create_time)
            SELECT $1, COUNT(*)::int, $2 FROM banner
            RETURNING id, path, sort_index, create_time
            "#,
        )
        .bind(path)
        .bind(create_time)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into_banner())
    }

    async fn list_banners(&self) -> CatalogResult<Vec<Banner>> {
        let rows = sqlx::query_as::<_, BannerRow>(
            r#"
            SELECT id, path, sort_index, create_time
            FROM banner
            ORDER BY sort_index ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BannerRow::into_banner).collect())
    }

    async fn move_banner(
        &self,
        id: i32,
        direction: BannerMove,
    ) -> CatalogResult<BannerMoveOutcome> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(LOCK_BANNERS).execute(&mut *tx).await?;

        let current: Option<(i32,)> = sqlx::query_as("SELECT sort_index FROM banner WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some((index,)) = current else {
            tx.rollback().await?;
            return Ok(BannerMoveOutcome::BannerMissing);
        };

        let neighbour = match direction.neighbour_of(index) {
            Some(target) => sqlx::query_as::<_, (i32,)>(
                "SELECT id FROM banner WHERE sort_index = $1 LIMIT 1",
            )
            .bind(target)
            .fetch_optional(&mut *tx)
            .await?
            .map(|(neighbour_id,)| (neighbour_id, target)),
            None => None,
        };
        let Some((neighbour_id, target)) = neighbour else {
            tx.rollback().await?;
            return Ok(BannerMoveOutcome::NeighbourMissing);
        };

        for (banner_id, new_index) in [(id, target), (neighbour_id, index)] {
            sqlx::query("UPDATE banner SET sort_index = $2 WHERE id = $1")
                .bind(banner_id)
                .bind(new_index)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(BannerMoveOutcome::Moved)
    }

    async fn delete_banner(&self, id: i32) -> CatalogResult<Option<Banner>> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(LOCK_BANNERS).execute(&mut *tx).await?;

        let row = sqlx::query_as::<_, BannerRow>(
            r#"
            DELETE FROM banner
            WHERE id = $1
            RETURNING id, path, sort_index, create_time
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query("UPDATE banner SET sort_index = sort_index - 1 WHERE sort_index > $1")
            .bind(row.sort_index)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(row.into_banner()))
    }
}

#[derive(sqlx::FromRow)]
struct BannerRow {
    id: i32,
    path: String,
    sort_index: i32,
    create_time: DateTime<Utc>,
}

impl BannerRow {
    fn into_banner(self) -> Banner {
        Banner {
            id: self.id,
            path: self.path,
            index: self.sort_index,
            create_time: self.create_time,
        }
    }
}
