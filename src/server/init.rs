/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum application:
 * state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Create the shared poll store
 * 2. Create the router with all routes and the boundary layers
 */

use axum::Router;

use crate::routes::router::create_router;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// Sets up the shared state and the full router, with the panic boundary
/// wrapping every route. The returned router is ready to serve.
pub fn create_app() -> Router {
    tracing::info!("initializing pollboard server");

    let app_state = AppState::new();
    let app = create_router(app_state);

    tracing::info!("router configured");
    app
}
