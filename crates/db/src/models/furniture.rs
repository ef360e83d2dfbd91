//! Furniture model and DTOs.

use roomfit_core::fit::Dimensions;
use roomfit_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `furniture` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Furniture {
    pub id: DbId,
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Furniture {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.length, self.width, self.height)
    }
}

/// DTO for creating a furniture item. Accepts the legacy `furniture_name`
/// form field too.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFurniture {
    #[serde(alias = "furniture_name")]
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl CreateFurniture {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.length, self.width, self.height)
    }
}
