//! Archive rows written by the delete triggers.

use roomfit_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::archive::{SOURCE_FURNITURE, SOURCE_ROOM};

/// A row from the `deleted_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DeletedItem {
    pub id: DbId,
    /// `ROOM` or `FURNITURE`.
    pub source_table: String,
    /// Id the row had in its source table.
    pub source_id: DbId,
    pub item_name: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub deleted_at: Timestamp,
}

/// Which table an archive row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ArchiveSource {
    Room,
    Furniture,
}

impl ArchiveSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ArchiveSource::Room => SOURCE_ROOM,
            ArchiveSource::Furniture => SOURCE_FURNITURE,
        }
    }
}
