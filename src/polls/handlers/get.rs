/**
 * Poll Retrieval Handlers
 *
 * Handlers for GET /api/polls (list) and GET /api/polls/{id} (single).
 * Listing is infallible; single retrieval maps the not-found failure
 * to 404 through its own status table.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::error::types::{ApiError, StatusMap};
use crate::polls::handlers::types::{PollListResponse, PollResponse};
use crate::server::state::SharedPollStore;
use crate::shared::error::poll;

/// Failure codes this operation produces and their status classes
const GET_POLL_STATUS: StatusMap =
    StatusMap::new(&[(poll::NOT_FOUND.code, StatusCode::NOT_FOUND)]);

/// Get a single poll by ID
///
/// Returns `200 OK` with the poll, or `404 Not Found` with a
/// `Poll.NotFound` problem document.
pub async fn get_poll(
    State(store): State<SharedPollStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<PollResponse>, ApiError> {
    let found = store.read().await.get(id).map_err(|e| {
        tracing::warn!(poll_id = %id, code = e.code, "poll lookup failed");
        GET_POLL_STATUS.resolve(e)
    })?;

    Ok(Json(PollResponse::from(found)))
}

/// List all polls, oldest first
pub async fn list_polls(State(store): State<SharedPollStore>) -> Json<PollListResponse> {
    let polls = store
        .read()
        .await
        .list()
        .into_iter()
        .map(PollResponse::from)
        .collect();

    Json(PollListResponse { polls })
}
