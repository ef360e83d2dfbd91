//! Route definitions for `/rooms`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::rooms;
use crate::state::AppState;

/// Room routes mounted at `/rooms`.
///
/// ```text
/// GET    /                  -> list_rooms
/// POST   /                  -> create_room
/// POST   /{id}/delete       -> delete_room
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rooms::list_rooms).post(rooms::create_room))
        .route("/{id}/delete", post(rooms::delete_room))
}
