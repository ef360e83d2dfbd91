//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! Rows are never updated, so there are no patch DTOs.

pub mod deleted_item;
pub mod furniture;
pub mod room;

use roomfit_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// `(id, name)` pair used to populate selection lists.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NamedOption {
    pub id: DbId,
    pub name: String,
}
