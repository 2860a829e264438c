/**
 * Vote Casting Handler
 *
 * This module implements the vote handler for POST /api/polls/{id}/votes.
 *
 * # Status Mapping
 *
 * The handler's table maps the missing-poll and missing-option failures to
 * 404 and the duplicate-vote failure to 409. The same one-submission-wins
 * discipline as poll creation: the second identical submission is a
 * conflict, not an error the client can retry into success.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::error::types::{ApiError, StatusMap};
use crate::polls::handlers::types::{CastVoteRequest, PollResponse};
use crate::server::state::SharedPollStore;
use crate::shared::error::{poll, vote};

/// Failure codes this operation produces and their status classes
const CAST_VOTE_STATUS: StatusMap = StatusMap::new(&[
    (poll::NOT_FOUND.code, StatusCode::NOT_FOUND),
    (vote::OPTION_NOT_FOUND.code, StatusCode::NOT_FOUND),
    (vote::ALREADY_CAST.code, StatusCode::CONFLICT),
]);

/// Cast a vote on a poll option
///
/// Returns `200 OK` with the updated tallies, or a problem document:
///
/// * `404 Not Found` - unknown poll, or option not belonging to the poll
/// * `409 Conflict` - this voter already voted on the poll
pub async fn cast_vote(
    State(store): State<SharedPollStore>,
    Path(poll_id): Path<Uuid>,
    Json(request): Json<CastVoteRequest>,
) -> Result<Json<PollResponse>, ApiError> {
    let updated = store
        .write()
        .await
        .cast_vote(poll_id, request.option_id, &request.voter)
        .map_err(|e| {
            tracing::warn!(poll_id = %poll_id, code = e.code, "vote rejected");
            CAST_VOTE_STATUS.resolve(e)
        })?;

    tracing::info!(poll_id = %poll_id, option_id = %request.option_id, "vote cast");
    Ok(Json(PollResponse::from(updated)))
}
