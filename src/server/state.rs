/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * necessary `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * The only shared mutable state is the poll store behind
 * `Arc<RwLock<PollStore>>`; each request takes the lock for the duration
 * of one store operation. The error registry is immutable `'static` data
 * and needs no synchronization.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets handlers extract the store directly
 * (`State<SharedPollStore>`) without taking the whole `AppState`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use tokio::sync::RwLock;

use crate::polls::state::PollStore;

/// The poll store as shared by request handlers
pub type SharedPollStore = Arc<RwLock<PollStore>>;

/// Central application state
#[derive(Clone)]
pub struct AppState {
    /// Shared poll store
    pub polls: SharedPollStore,
}

impl AppState {
    /// Create state with an empty store.
    pub fn new() -> Self {
        Self {
            polls: Arc::new(RwLock::new(PollStore::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl FromRef<AppState> for SharedPollStore {
    fn from_ref(state: &AppState) -> Self {
        state.polls.clone()
    }
}
