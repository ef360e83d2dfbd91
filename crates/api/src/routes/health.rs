//! Service health at `/health`, mounted at the root rather than under
//! `/api/v1`.
//!
//! Besides database reachability the check reports whether the delete archive
//! triggers are installed. Without them deletes still succeed but leave no
//! archive row, so the service reports itself `degraded`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// `ok`, `degraded` (archive triggers missing) or `unavailable`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub archive_ready: bool,
}

impl HealthStatus {
    fn new(db_healthy: bool, archive_ready: bool) -> Self {
        let status = match (db_healthy, archive_ready) {
            (true, true) => "ok",
            (true, false) => "degraded",
            (false, _) => "unavailable",
        };
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            archive_ready,
        }
    }

    /// 503 only when the database cannot be reached.
    fn http_status(&self) -> StatusCode {
        if self.db_healthy {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let db_healthy = roomfit_db::health_check(&state.pool).await.is_ok();
    let archive_ready = db_healthy
        && match roomfit_db::archive_triggers_installed(&state.pool).await {
            Ok(installed) => installed,
            Err(err) => {
                tracing::warn!(error = %err, "Archive trigger lookup failed");
                false
            }
        };

    let body = HealthStatus::new(db_healthy, archive_ready);
    if body.status != "ok" {
        tracing::warn!(status = body.status, db_healthy, archive_ready, "Health check not ok");
    }
    (body.http_status(), Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
