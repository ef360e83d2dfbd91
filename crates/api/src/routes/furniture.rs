//! Route definitions for `/furniture`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::furniture;
use crate::state::AppState;

/// Furniture routes mounted at `/furniture`.
///
/// ```text
/// GET    /                  -> list_furniture
/// POST   /                  -> create_furniture
/// POST   /{id}/delete       -> delete_furniture
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(furniture::list_furniture).post(furniture::create_furniture),
        )
        .route("/{id}/delete", post(furniture::delete_furniture))
}
