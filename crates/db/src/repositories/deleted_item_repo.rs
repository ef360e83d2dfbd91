//! Read access to the `deleted_items` archive.
//!
//! Rows are only ever written by the delete triggers installed by
//! [`crate::ensure_delete_archive_objects`].

use sqlx::PgPool;

use crate::models::deleted_item::{ArchiveSource, DeletedItem};

const COLUMNS: &str = "\
    id, source_table, source_id, item_name, length, width, height, deleted_at";

/// Provides data access for archived rows.
pub struct DeletedItemRepo;

impl DeletedItemRepo {
    /// List archive rows newest first, optionally limited to one source table.
    pub async fn list(
        pool: &PgPool,
        source: Option<ArchiveSource>,
    ) -> Result<Vec<DeletedItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM deleted_items \
             WHERE ($1::TEXT IS NULL OR source_table = $1) \
             ORDER BY deleted_at DESC, id DESC"
        );
        sqlx::query_as::<_, DeletedItem>(&query)
            .bind(source.map(ArchiveSource::as_str))
            .fetch_all(pool)
            .await
    }

    /// Total number of archived rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM deleted_items")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
