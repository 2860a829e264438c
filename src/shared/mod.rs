//! Shared Domain Types
//!
//! This module contains the domain vocabulary used across the crate:
//! the error registry, the result type, and the poll models.
//!
//! Everything here is transport-agnostic. HTTP concerns (status codes,
//! response shapes) live in the `error` module; handlers translate between
//! the two at the edge.

/// Error registry: `DomainError` and the per-entity code constants
pub mod error;

/// The `DomainResult` outcome type
pub mod result;

/// Poll and poll-option models with validation
pub mod poll;

// Re-export commonly used types
pub use error::DomainError;
pub use poll::{NewPoll, Poll, PollOption};
pub use result::DomainResult;
