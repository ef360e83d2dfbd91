use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roomfit_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{ "error": <one-line notice>, "code": <CODE> }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roomfit_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error raised while performing a named user action, e.g.
    /// `"Error adding room"`.
    #[error("{action}: {source}")]
    DatabaseAction {
        action: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build a `map_err` adapter that tags a sqlx error with the action that
    /// failed.
    ///
    /// ```ignore
    /// RoomRepo::create(&state.pool, &input)
    ///     .await
    ///     .map_err(AppError::db_action("Error adding room"))?;
    /// ```
    pub fn db_action(action: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::DatabaseAction { action, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
            },

            // --- Database errors ---
            AppError::DatabaseAction { action, source } => {
                tracing::error!(error = %source, action = %action, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    format!("{action}: a database error occurred"),
                )
            }

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
