/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layer Order
 *
 * Layers added later wrap everything added before them, so the panic
 * boundary is attached last: it must be the outermost layer, covering the
 * handlers and the tracing middleware alike. There is exactly one boundary
 * for the whole pipeline; no route carries its own.
 */

use axum::{http::StatusCode, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::error::types::ApiError;
use crate::middleware::panic::boundary_layer;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// - `GET /health` - liveness probe
/// - `/api/...` - poll and vote endpoints (see `api_routes`)
/// - fallback - 404 problem document for unknown paths
pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new().route("/health", get(health));

    // Add API routes
    let router = configure_api_routes(router);

    // Fallback handler for unknown routes
    let router = router.fallback(fallback);

    router
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(boundary_layer())
}

/// Liveness probe
async fn health() -> &'static str {
    "ok"
}

/// Unknown routes answer with a problem document, same shape as every
/// other error response.
async fn fallback() -> ApiError {
    ApiError::from_status(StatusCode::NOT_FOUND)
}
