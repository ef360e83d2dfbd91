//! Handlers for the `/rooms` resource.
//!
//! Rooms can be listed, created and deleted; there is no edit. Deleting a
//! room leaves an archive row behind via the database trigger.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roomfit_core::error::CoreError;
use roomfit_core::types::DbId;
use roomfit_core::validation::{validate_dimensions, validate_name};
use roomfit_db::models::room::{CreateRoom, Room};
use roomfit_db::repositories::RoomRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::ItemId;
use crate::middleware::session::Session;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for a newly created room.
#[derive(Debug, Serialize)]
pub struct CreatedRoom {
    pub room: Room,
    pub message: &'static str,
}

/// Response body for a deleted room.
#[derive(Debug, Serialize)]
pub struct DeletedRoom {
    pub id: DbId,
    pub message: &'static str,
}

/// GET /api/v1/rooms
///
/// List all rooms, most recently added first.
pub async fn list_rooms(
    State(state): State<AppState>,
    _session: Session,
) -> AppResult<Json<DataResponse<Vec<Room>>>> {
    let rooms = RoomRepo::list(&state.pool)
        .await
        .map_err(AppError::db_action("Error loading rooms"))?;
    Ok(Json(DataResponse { data: rooms }))
}

/// POST /api/v1/rooms
///
/// Validate and insert a room. All four fields are stored exactly as
/// submitted.
pub async fn create_room(
    State(state): State<AppState>,
    _session: Session,
    Json(input): Json<CreateRoom>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedRoom>>)> {
    validate_name(&input.name)?;
    validate_dimensions(&input.dimensions())?;

    let room = RoomRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::db_action("Error adding room"))?;

    tracing::info!(room_id = room.id, name = %room.name, "Room added");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedRoom {
                room,
                message: "Room added successfully!",
            },
        }),
    ))
}

/// POST /api/v1/rooms/{id}/delete
///
/// Delete a room. Returns 404 if no room has the given id.
pub async fn delete_room(
    State(state): State<AppState>,
    _session: Session,
    ItemId(id): ItemId,
) -> AppResult<Json<DataResponse<DeletedRoom>>> {
    let deleted = RoomRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::db_action("Error deleting room"))?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Room", id }));
    }

    tracing::info!(room_id = id, "Room deleted");

    Ok(Json(DataResponse {
        data: DeletedRoom {
            id,
            message: "Room deleted successfully!",
        },
    }))
}
