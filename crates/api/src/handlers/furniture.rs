//! Handlers for the `/furniture` resource.
//!
//! Items can be listed, created and deleted; there is no edit. Deleting an
//! item leaves an archive row behind via the database trigger.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roomfit_core::error::CoreError;
use roomfit_core::types::DbId;
use roomfit_core::validation::{validate_dimensions, validate_name};
use roomfit_db::models::furniture::{CreateFurniture, Furniture};
use roomfit_db::repositories::FurnitureRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::ItemId;
use crate::middleware::session::Session;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for a newly created furniture item.
#[derive(Debug, Serialize)]
pub struct CreatedFurniture {
    pub furniture: Furniture,
    pub message: &'static str,
}

/// Response body for a deleted furniture item.
#[derive(Debug, Serialize)]
pub struct DeletedFurniture {
    pub id: DbId,
    pub message: &'static str,
}

/// GET /api/v1/furniture
///
/// List all furniture items, most recently added first.
pub async fn list_furniture(
    State(state): State<AppState>,
    _session: Session,
) -> AppResult<Json<DataResponse<Vec<Furniture>>>> {
    let furniture = FurnitureRepo::list(&state.pool)
        .await
        .map_err(AppError::db_action("Error loading furniture"))?;
    Ok(Json(DataResponse { data: furniture }))
}

/// POST /api/v1/furniture
///
/// Validate and insert a furniture item. All four fields are
/// stored exactly as submitted.
pub async fn create_furniture(
    State(state): State<AppState>,
    _session: Session,
    Json(input): Json<CreateFurniture>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedFurniture>>)> {
    validate_name(&input.name)?;
    validate_dimensions(&input.dimensions())?;

    let furniture = FurnitureRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::db_action("Error adding furniture"))?;

    tracing::info!(furniture_id = furniture.id, name = %furniture.name, "Furniture added");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedFurniture {
                furniture,
                message: "Furniture added successfully!",
            },
        }),
    ))
}

/// POST /api/v1/furniture/{id}/delete
///
/// Delete a furniture item. Returns 404 if no furniture item has the given id.
pub async fn delete_furniture(
    State(state): State<AppState>,
    _session: Session,
    ItemId(id): ItemId,
) -> AppResult<Json<DataResponse<DeletedFurniture>>> {
    let deleted = FurnitureRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::db_action("Error deleting furniture"))?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Furniture", id }));
    }

    tracing::info!(furniture_id = id, "Furniture deleted");

    Ok(Json(DataResponse {
        data: DeletedFurniture {
            id,
            message: "Furniture deleted successfully!",
        },
    }))
}
