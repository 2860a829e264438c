/**
 * Create Poll Handler
 *
 * This module implements the poll creation handler for POST /api/polls.
 *
 * # Creation Process
 *
 * 1. Validate the submission (title, option count, distinct labels)
 * 2. Check the title-uniqueness constraint
 * 3. Insert the poll with a generated identifier
 * 4. Return the created poll
 *
 * # Status Mapping
 *
 * The handler declares its own code-to-status table: validation failures
 * map to 400, the uniqueness violation maps to 409. An unexpected code
 * degrades to a sanitized 500.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::error::types::{ApiError, StatusMap};
use crate::polls::handlers::types::{CreatePollRequest, PollResponse};
use crate::server::state::SharedPollStore;
use crate::shared::error::poll;
use crate::shared::poll::NewPoll;

/// Failure codes this operation produces and their status classes
const CREATE_POLL_STATUS: StatusMap = StatusMap::new(&[
    (poll::EMPTY_TITLE.code, StatusCode::BAD_REQUEST),
    (poll::TOO_FEW_OPTIONS.code, StatusCode::BAD_REQUEST),
    (poll::DUPLICATED_OPTION.code, StatusCode::BAD_REQUEST),
    (poll::DUPLICATED_TITLE.code, StatusCode::CONFLICT),
]);

/// Create poll handler
///
/// # Arguments
///
/// * `State(store)` - Shared poll store
/// * `Json(request)` - Create request containing title and option labels
///
/// # Returns
///
/// `201 Created` with the created poll (generated UUID), or a problem
/// document:
///
/// * `400 Bad Request` - validation failure (empty title, too few options,
///   duplicated option labels)
/// * `409 Conflict` - a poll with the same title already exists
///
/// # Example Request
///
/// ```http
/// POST /api/polls HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "title": "Team lunch",
///   "options": ["Tacos", "Ramen"]
/// }
/// ```
pub async fn create_poll(
    State(store): State<SharedPollStore>,
    Json(request): Json<CreatePollRequest>,
) -> Result<(StatusCode, Json<PollResponse>), ApiError> {
    tracing::info!(title = %request.title, "create poll request");

    let new_poll = NewPoll {
        title: request.title,
        options: request.options,
    };

    let created = store.write().await.create(new_poll).map_err(|e| {
        tracing::warn!(code = e.code, "poll creation failed");
        CREATE_POLL_STATUS.resolve(e)
    })?;

    tracing::info!(poll_id = %created.id, "poll created");
    Ok((StatusCode::CREATED, Json(PollResponse::from(created))))
}
