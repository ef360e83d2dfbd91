//! Route definitions for session start/end.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Landing route mounted at the root.
///
/// ```text
/// GET    /                  -> index
/// ```
pub fn index_router() -> Router<AppState> {
    Router::new().route("/", get(auth::index))
}

/// Session routes mounted under `/api/v1`.
///
/// ```text
/// GET    /login             -> login_page
/// POST   /login             -> login
/// POST   /logout            -> logout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}
