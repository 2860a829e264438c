/**
 * Poll Deletion Handler
 *
 * Handler for DELETE /api/polls/{id}. Returns 204 on success; the
 * not-found failure maps to 404 through the handler's status table.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::error::types::{ApiError, StatusMap};
use crate::server::state::SharedPollStore;
use crate::shared::error::poll;

/// Failure codes this operation produces and their status classes
const DELETE_POLL_STATUS: StatusMap =
    StatusMap::new(&[(poll::NOT_FOUND.code, StatusCode::NOT_FOUND)]);

/// Delete a poll by ID
pub async fn delete_poll(
    State(store): State<SharedPollStore>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    store.write().await.remove(id).map_err(|e| {
        tracing::warn!(poll_id = %id, code = e.code, "poll deletion failed");
        DELETE_POLL_STATUS.resolve(e)
    })?;

    tracing::info!(poll_id = %id, "poll deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polls::state::PollStore;
    use crate::shared::poll::NewPoll;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    #[tokio::test]
    async fn test_delete_then_lookup_fails() {
        let store = Arc::new(RwLock::new(PollStore::new()));
        let created = store
            .write()
            .await
            .create(NewPoll {
                title: "Ephemeral".to_string(),
                options: vec!["Yes".to_string(), "No".to_string()],
            })
            .expect("create failed");

        let status = delete_poll(State(store.clone()), Path(created.id))
            .await
            .expect("delete failed");
        assert_eq!(status, StatusCode::NO_CONTENT);

        let error = delete_poll(State(store), Path(created.id))
            .await
            .expect_err("expected not found");
        assert_eq!(error.status, StatusCode::NOT_FOUND);
        assert_eq!(error.errors[0].code, "Poll.NotFound");
    }
}
