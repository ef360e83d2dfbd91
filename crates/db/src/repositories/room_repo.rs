//! Repository for the `room` table.

use roomfit_core::fit::Dimensions;
use roomfit_core::types::DbId;
use sqlx::PgPool;

use crate::models::room::{CreateRoom, Room};
use crate::models::NamedOption;

/// Column list for `room` queries.
const COLUMNS: &str = "id, name, length, width, height, created_at, updated_at";

/// Provides data access for rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// List all rooms, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM room ORDER BY id DESC");
        sqlx::query_as::<_, Room>(&query).fetch_all(pool).await
    }

    /// `(id, name)` pairs for selection lists, in id order.
    pub async fn list_options(pool: &PgPool) -> Result<Vec<NamedOption>, sqlx::Error> {
        sqlx::query_as::<_, NamedOption>("SELECT id, name FROM room ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Fetch only the dimensions of a room.
    pub async fn find_dimensions(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Dimensions>, sqlx::Error> {
        let row: Option<(f64, f64, f64)> =
            sqlx::query_as("SELECT length, width, height FROM room WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|(length, width, height)| Dimensions::new(length, width, height)))
    }

    /// Insert a room, returning the stored row.
    pub async fn create(pool: &PgPool, dto: &CreateRoom) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO room (name, length, width, height) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(&dto.name)
            .bind(dto.length)
            .bind(dto.width)
            .bind(dto.height)
            .fetch_one(pool)
            .await
    }

    /// Delete a room by ID. Returns `true` if a row was removed.
    ///
    /// The archive trigger copies the row into `deleted_items` first.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM room WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of rooms.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM room")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
