//! Handlers for the `/deleted-items` archive listing.

use axum::extract::{Query, State};
use axum::Json;
use roomfit_db::models::deleted_item::{ArchiveSource, DeletedItem};
use roomfit_db::repositories::DeletedItemRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::session::Session;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the archive listing.
#[derive(Debug, Deserialize)]
pub struct DeletedItemsQuery {
    /// Optional source table filter (`ROOM` or `FURNITURE`).
    pub source: Option<ArchiveSource>,
}

/// GET /api/v1/deleted-items
///
/// List archived rows, newest deletion first.
pub async fn list_deleted_items(
    State(state): State<AppState>,
    _session: Session,
    Query(params): Query<DeletedItemsQuery>,
) -> AppResult<Json<DataResponse<Vec<DeletedItem>>>> {
    let items = DeletedItemRepo::list(&state.pool, params.source)
        .await
        .map_err(AppError::db_action("Error loading deleted items"))?;
    Ok(Json(DataResponse { data: items }))
}
