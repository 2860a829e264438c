/**
 * API Route Handlers
 *
 * This module registers the poll API endpoints:
 *
 * - `POST /api/polls` - create a poll
 * - `GET /api/polls` - list polls
 * - `GET /api/polls/{id}` - get a poll
 * - `DELETE /api/polls/{id}` - delete a poll
 * - `POST /api/polls/{id}/votes` - cast a vote
 *
 * All endpoints are public; there is no authentication layer.
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::polls::handlers::{cast_vote, create_poll, delete_poll, get_poll, list_polls};
use crate::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with the poll API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/polls", post(create_poll).get(list_polls))
        .route("/api/polls/{id}", get(get_poll).delete(delete_poll))
        .route("/api/polls/{id}/votes", post(cast_vote))
}
