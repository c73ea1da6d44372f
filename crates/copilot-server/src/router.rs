//! Axum router construction for the Co-Pilot server.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the Co-Pilot server.
///
/// The router includes:
/// - `GET /` -- minimal HTML demo page
/// - `GET /api/scenarios` -- the scenario catalog
/// - `POST /api/scenarios/{id}/trigger` -- run the trigger pipeline
/// - `GET /api/alerts` -- bounded log (newest-first) + current alert
/// - `GET /api/alerts/current` -- current alert only
/// - `GET /api/stats` -- per-scenario occurrence statistics
/// - `POST /api/speech` -- queue speech playback
/// - `GET /api/speech/status` -- last speech job status
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Demo page
        .route("/", get(handlers::index))
        // REST API
        .route("/api/scenarios", get(handlers::list_scenarios))
        .route(
            "/api/scenarios/{id}/trigger",
            post(handlers::trigger_scenario),
        )
        .route("/api/alerts", get(handlers::list_alerts))
        .route("/api/alerts/current", get(handlers::current_alert))
        .route("/api/stats", get(handlers::scenario_stats))
        .route("/api/speech", post(handlers::speak))
        .route("/api/speech/status", get(handlers::speech_status))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
