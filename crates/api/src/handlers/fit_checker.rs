//! Handlers for the fit checker.
//!
//! Both endpoints return the room and furniture selection lists. A POST with
//! both ids additionally carries a verdict; if either id is missing or does
//! not match a row the verdict is `null`, mirroring a page rendered without a
//! result. A failed dimension lookup also leaves the verdict `null` and sets
//! `message`, so the selection lists survive the error.

use axum::extract::State;
use axum::Json;
use roomfit_core::fit::FitVerdict;
use roomfit_core::types::DbId;
use roomfit_db::models::NamedOption;
use roomfit_db::repositories::{FurnitureRepo, RoomRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::session::Session;
use crate::response::DataResponse;
use crate::state::AppState;

/// Notice returned when the dimension lookup fails.
pub const FIT_ERROR: &str = "Error checking fit";

/// Request body for `POST /fit-checker`.
#[derive(Debug, Deserialize)]
pub struct FitCheckRequest {
    pub room_id: Option<DbId>,
    pub furniture_id: Option<DbId>,
}

/// Fit checker page data.
#[derive(Debug, Serialize)]
pub struct FitCheckerPage {
    pub rooms: Vec<NamedOption>,
    pub furniture: Vec<NamedOption>,
    pub result: Option<FitVerdict>,
    pub message: Option<&'static str>,
}

/// GET /api/v1/fit-checker
pub async fn fit_checker_page(
    State(state): State<AppState>,
    _session: Session,
) -> AppResult<Json<DataResponse<FitCheckerPage>>> {
    let page = load_page(&state, None, None).await?;
    Ok(Json(DataResponse { data: page }))
}

/// POST /api/v1/fit-checker
///
/// Compare the chosen furniture item against the chosen room.
pub async fn check_fit(
    State(state): State<AppState>,
    _session: Session,
    Json(input): Json<FitCheckRequest>,
) -> AppResult<Json<DataResponse<FitCheckerPage>>> {
    let (result, message) = match (input.room_id, input.furniture_id) {
        (Some(room_id), Some(furniture_id)) => {
            match evaluate(&state, room_id, furniture_id).await {
                Ok(result) => (result, None),
                Err(err) => {
                    tracing::error!(error = %err, room_id, furniture_id, "Fit check failed");
                    (None, Some(FIT_ERROR))
                }
            }
        }
        _ => (None, None),
    };
    let page = load_page(&state, result, message).await?;
    Ok(Json(DataResponse { data: page }))
}

// ── Private helpers ──────────────────────────────────────────────────────

/// Fetch both selection lists and attach `result` and `message`.
async fn load_page(
    state: &AppState,
    result: Option<FitVerdict>,
    message: Option<&'static str>,
) -> AppResult<FitCheckerPage> {
    let rooms = RoomRepo::list_options(&state.pool)
        .await
        .map_err(AppError::db_action("Error loading rooms"))?;
    let furniture = FurnitureRepo::list_options(&state.pool)
        .await
        .map_err(AppError::db_action("Error loading furniture"))?;
    Ok(FitCheckerPage {
        rooms,
        furniture,
        result,
        message,
    })
}

/// Look up both dimension triples and compare them. `None` when either row
/// is missing.
async fn evaluate(
    state: &AppState,
    room_id: DbId,
    furniture_id: DbId,
) -> Result<Option<FitVerdict>, sqlx::Error> {
    let room = RoomRepo::find_dimensions(&state.pool, room_id).await?;
    let furniture = FurnitureRepo::find_dimensions(&state.pool, furniture_id).await?;

    let (Some(room), Some(furniture)) = (room, furniture) else {
        tracing::debug!(room_id, furniture_id, "Fit check skipped: row missing");
        return Ok(None);
    };

    let verdict = FitVerdict::evaluate(&furniture, &room);
    tracing::info!(room_id, furniture_id, fits = verdict.fits, "Fit checked");
    Ok(Some(verdict))
}
