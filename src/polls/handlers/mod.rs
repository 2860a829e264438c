//! Poll HTTP Handlers
//!
//! One module per operation, plus the shared request/response types.
//! Every handler follows the same shape: validate-and-call the store,
//! map any failure through the handler's own `StatusMap`, and return the
//! success payload.

/// Request and response types shared by the handlers
pub mod types;

/// Poll creation handler
pub mod create;

/// Poll retrieval handlers (single and list)
pub mod get;

/// Poll deletion handler
pub mod delete;

/// Vote casting handler
pub mod vote;

// Re-export handlers for route registration
pub use create::create_poll;
pub use delete::delete_poll;
pub use get::{get_poll, list_polls};
pub use vote::cast_vote;
