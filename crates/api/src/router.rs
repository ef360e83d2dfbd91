//! Route tree plus middleware, assembled in one place.
//!
//! `main.rs` and the integration tests both call [`build_app_router`], so a
//! request in a test passes through the same layers as in production.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Build the inventory application.
///
/// `/` and `/health` sit at the root; everything else lives under `/api/v1`.
///
/// Layers, outermost first as a request sees them:
///
/// - CORS, answering preflights before anything else runs
/// - `x-request-id` assignment, so the trace span below can record it
/// - per-request trace span at `INFO`
/// - `x-request-id` echoed on the response
/// - timeout (408 after `REQUEST_TIMEOUT_SECS`)
/// - panic recovery, turning a handler panic into a 500
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let app = Router::new()
        .merge(routes::auth::index_router())
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes());

    // `layer` wraps what is already there, so the last call is outermost.
    app.layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// CORS for the browser front-end.
///
/// The session travels in the `roomfit_session` cookie, so credentials must
/// be allowed, which in turn rules out a wildcard origin: only the origins in
/// `CORS_ORIGINS` are echoed back. Every route is `GET` or `POST` (deletes
/// are `POST .../delete`), and `Authorization` stays allowed for clients that
/// send the token as a bearer header instead.
///
/// An unparsable origin panics; this runs once at startup.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(3600))
}
