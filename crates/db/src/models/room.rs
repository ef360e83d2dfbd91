//! Room model and DTOs.

use roomfit_core::fit::Dimensions;
use roomfit_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `room` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Room {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.length, self.width, self.height)
    }
}

/// DTO for creating a room. Accepts the legacy `room_name` form field too.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoom {
    #[serde(alias = "room_name")]
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl CreateRoom {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.length, self.width, self.height)
    }
}
