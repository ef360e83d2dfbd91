//! Repository for the `furniture` table.

use roomfit_core::fit::Dimensions;
use roomfit_core::types::DbId;
use sqlx::PgPool;

use crate::models::furniture::{CreateFurniture, Furniture};
use crate::models::NamedOption;

/// Column list for `furniture` queries.
const COLUMNS: &str = "id, name, length, width, height, created_at, updated_at";

/// Provides data access for furniture items.
pub struct FurnitureRepo;

impl FurnitureRepo {
    /// List all furniture items, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Furniture>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM furniture ORDER BY id DESC");
        sqlx::query_as::<_, Furniture>(&query).fetch_all(pool).await
    }

    /// `(id, name)` pairs for selection lists, in id order.
    pub async fn list_options(pool: &PgPool) -> Result<Vec<NamedOption>, sqlx::Error> {
        sqlx::query_as::<_, NamedOption>("SELECT id, name FROM furniture ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Fetch only the dimensions of a furniture item.
    pub async fn find_dimensions(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Dimensions>, sqlx::Error> {
        let row: Option<(f64, f64, f64)> =
            sqlx::query_as("SELECT length, width, height FROM furniture WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|(length, width, height)| Dimensions::new(length, width, height)))
    }

    /// Insert a furniture item, returning the stored row.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateFurniture,
    ) -> Result<Furniture, sqlx::Error> {
        let query = format!(
            "INSERT INTO furniture (name, length, width, height) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Furniture>(&query)
            .bind(&dto.name)
            .bind(dto.length)
            .bind(dto.width)
            .bind(dto.height)
            .fetch_one(pool)
            .await
    }

    /// Delete a furniture item by ID. Returns `true` if a row was removed.
    ///
    /// The archive trigger copies the row into `deleted_items` first.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM furniture WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of furniture items.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM furniture")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
