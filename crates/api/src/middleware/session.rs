//! Session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use roomfit_core::error::CoreError;

use crate::auth::session::claims_from_headers;
use crate::error::AppError;
use crate::state::AppState;

/// A logged-in session, taken from the `Bearer` header or the session cookie.
///
/// Use this as an extractor parameter in any handler that requires a login:
///
/// ```ignore
/// async fn my_handler(session: Session) -> AppResult<Json<()>> {
///     tracing::info!(login_time = %session.login_time, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    /// When the session started, `%Y-%m-%d %H:%M:%S`.
    pub login_time: String,
}

impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = claims_from_headers(&parts.headers, &state.config.session)
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Login required".into())))?;

        Ok(Session {
            login_time: claims.login_time,
        })
    }
}
