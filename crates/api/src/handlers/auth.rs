//! Handlers for starting and ending a session.
//!
//! No credentials are checked: logging in simply stamps a new session with
//! the current time.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use roomfit_core::session::login_time_now;
use serde::Serialize;

use crate::auth::session::{
    claims_from_headers, clear_session_cookie, issue_token, session_cookie,
};
use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, Notice};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Where the client should go from the landing page.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub next: &'static str,
}

/// Session status shown on the login page.
#[derive(Debug, Serialize)]
pub struct LoginStatus {
    pub authenticated: bool,
    pub login_time: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub login_time: String,
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /
///
/// Point logged-in clients at the dashboard and everyone else at the login
/// page.
pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<DataResponse<IndexResponse>> {
    let next = match claims_from_headers(&headers, &state.config.session) {
        Some(_) => "/dashboard",
        None => "/login",
    };
    Json(DataResponse {
        data: IndexResponse { next },
    })
}

/// GET /api/v1/login
pub async fn login_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<DataResponse<LoginStatus>> {
    let login_time = claims_from_headers(&headers, &state.config.session).map(|c| c.login_time);
    Json(DataResponse {
        data: LoginStatus {
            authenticated: login_time.is_some(),
            login_time,
        },
    })
}

/// POST /api/v1/login
///
/// Start a session stamped with the current local time. The token is returned
/// in the body and installed as a cookie.
pub async fn login(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let login_time = login_time_now();
    let token = issue_token(&login_time, &state.config.session)
        .map_err(|e| AppError::InternalError(format!("Failed to sign session token: {e}")))?;

    tracing::info!(login_time = %login_time, "Session started");

    let cookie = session_cookie(&token, &state.config.session);
    Ok((
        [(SET_COOKIE, cookie)],
        Json(DataResponse {
            data: LoginResponse {
                token,
                login_time,
                message: "Successfully logged in!",
            },
        }),
    ))
}

/// POST /api/v1/logout
///
/// Clear the session cookie. Tokens are stateless, so a client holding a
/// bearer token simply discards it.
pub async fn logout() -> impl IntoResponse {
    (
        [(SET_COOKIE, clear_session_cookie())],
        Json(DataResponse {
            data: Notice {
                message: "You have been logged out.",
            },
        }),
    )
}
