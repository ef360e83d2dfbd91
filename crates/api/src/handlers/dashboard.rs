//! Handlers for the dashboard and session info pages.

use axum::extract::State;
use axum::Json;
use roomfit_db::repositories::{DeletedItemRepo, FurnitureRepo, RoomRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::session::Session;
use crate::response::DataResponse;
use crate::state::AppState;

const LOAD_ERROR: &str = "Error loading dashboard";

/// Inventory overview for the dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub login_time: String,
    pub room_count: i64,
    pub furniture_count: i64,
    pub archived_count: i64,
}

/// Details of the current session.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub login_time: String,
}

/// GET /api/v1/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let room_count = RoomRepo::count(&state.pool)
        .await
        .map_err(AppError::db_action(LOAD_ERROR))?;
    let furniture_count = FurnitureRepo::count(&state.pool)
        .await
        .map_err(AppError::db_action(LOAD_ERROR))?;
    let archived_count = DeletedItemRepo::count(&state.pool)
        .await
        .map_err(AppError::db_action(LOAD_ERROR))?;

    Ok(Json(DataResponse {
        data: DashboardSummary {
            login_time: session.login_time,
            room_count,
            furniture_count,
            archived_count,
        },
    }))
}

/// GET /api/v1/sessions
pub async fn session_info(session: Session) -> Json<DataResponse<SessionInfo>> {
    Json(DataResponse {
        data: SessionInfo {
            login_time: session.login_time,
        },
    })
}
