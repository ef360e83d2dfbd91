pub mod auth;
pub mod furniture;
pub mod health;
pub mod rooms;

use axum::routing::get;
use axum::Router;

use crate::handlers::{dashboard, deleted_items, fit_checker};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /login                                           page data (GET), start session (POST)
/// /logout                                          end session (POST)
///
/// /dashboard                                       inventory summary
/// /sessions                                        current session info
///
/// /rooms                                           list, create
/// /rooms/{id}/delete                               delete (POST)
///
/// /furniture                                       list, create
/// /furniture/{id}/delete                           delete (POST)
///
/// /fit-checker                                     selection lists (GET), check (POST)
///
/// /deleted-items                                   archive listing (?source=ROOM|FURNITURE)
/// ```
///
/// Everything except `/login` and `/logout` requires a session.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .route("/dashboard", get(dashboard::dashboard))
        .route("/sessions", get(dashboard::session_info))
        .nest("/rooms", rooms::router())
        .nest("/furniture", furniture::router())
        .route(
            "/fit-checker",
            get(fit_checker::fit_checker_page).post(fit_checker::check_fit),
        )
        .route("/deleted-items", get(deleted_items::list_deleted_items))
}
