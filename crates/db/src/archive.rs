//! Provisioning of the delete archive.
//!
//! Every row removed from `room` or `furniture` is copied into
//! `deleted_items` by a `BEFORE DELETE` row trigger. The objects are created
//! at startup rather than by a migration so that an existing database which
//! predates the archive picks it up without manual steps.

use crate::DbPool;

/// Table name used for `room` rows in `deleted_items.source_table`.
pub const SOURCE_ROOM: &str = "ROOM";

/// Table name used for `furniture` rows in `deleted_items.source_table`.
pub const SOURCE_FURNITURE: &str = "FURNITURE";

const CREATE_ARCHIVE_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS deleted_items ( \
        id           BIGSERIAL PRIMARY KEY, \
        source_table TEXT NOT NULL, \
        source_id    BIGINT NOT NULL, \
        item_name    TEXT NOT NULL, \
        length       DOUBLE PRECISION NOT NULL, \
        width        DOUBLE PRECISION NOT NULL, \
        height       DOUBLE PRECISION NOT NULL, \
        deleted_at   TIMESTAMPTZ NOT NULL DEFAULT now() \
    )";

/// Shared trigger body; the source table label is passed as the first
/// trigger argument.
const CREATE_ARCHIVE_FUNCTION: &str = "\
    CREATE OR REPLACE FUNCTION archive_deleted_item() RETURNS trigger AS $$ \
    BEGIN \
        INSERT INTO deleted_items (source_table, source_id, item_name, length, width, height) \
        VALUES (TG_ARGV[0], OLD.id, OLD.name, OLD.length, OLD.width, OLD.height); \
        RETURN OLD; \
    END; \
    $$ LANGUAGE plpgsql";

/// `(trigger name, table, source label)` for each archived table.
const ARCHIVE_TRIGGERS: [(&str, &str, &str); 2] = [
    ("trg_room_delete_archive", "room", SOURCE_ROOM),
    ("trg_furniture_delete_archive", "furniture", SOURCE_FURNITURE),
];

/// Create the archive table, trigger function and triggers if needed.
///
/// Idempotent: the table is only created when missing, the function is
/// replaced in place, and each trigger is dropped and recreated inside the
/// same transaction so a concurrent delete never runs without it.
pub async fn ensure_delete_archive_objects(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(CREATE_ARCHIVE_TABLE).execute(&mut *tx).await?;
    sqlx::query(CREATE_ARCHIVE_FUNCTION)
        .execute(&mut *tx)
        .await?;

    for (trigger, table, source) in ARCHIVE_TRIGGERS {
        sqlx::query(&format!("DROP TRIGGER IF EXISTS {trigger} ON {table}"))
            .execute(&mut *tx)
            .await?;
        sqlx::query(&format!(
            "CREATE TRIGGER {trigger} \
             BEFORE DELETE ON {table} \
             FOR EACH ROW EXECUTE FUNCTION archive_deleted_item('{source}')"
        ))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::debug!("Delete archive objects ensured");
    Ok(())
}

/// Whether both archive triggers are currently installed.
pub async fn archive_triggers_installed(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let names: Vec<&str> = ARCHIVE_TRIGGERS.iter().map(|(name, _, _)| *name).collect();
    let (installed,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM pg_trigger WHERE NOT tgisinternal AND tgname::TEXT = ANY($1)",
    )
    .bind(&names)
    .fetch_one(pool)
    .await?;
    Ok(installed == names.len() as i64)
}
