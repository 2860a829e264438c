//! Domain Error Registry
//!
//! This module defines the `DomainError` value type and the process-wide
//! registry of error constants, grouped per domain entity.
//!
//! # Error Identity
//!
//! A `DomainError` is a `{code, description}` pair. The code is the stable
//! machine-readable identity (`"Poll.DuplicatedTitle"`); the description is
//! the human-readable text shipped to clients. Two errors are equal exactly
//! when their codes are equal.
//!
//! # Registry
//!
//! Constants are grouped per entity:
//!
//! - [`poll`] - poll lifecycle failures (not found, duplicate title, validation)
//! - [`vote`] - vote casting failures (unknown option, duplicate vote)
//!
//! # Usage
//!
//! ```rust
//! use pollboard::shared::error::poll;
//!
//! let error = poll::DUPLICATED_TITLE;
//! assert_eq!(error.code, "Poll.DuplicatedTitle");
//! ```
//!
//! # Thread Safety
//!
//! All constants are `'static` and `Copy`; they are created at compile time
//! and never mutated, so concurrent reads need no synchronization.

use serde::Serialize;
use thiserror::Error;

/// An expected domain failure: a stable code plus a client-safe description.
///
/// Returned by fallible domain operations through
/// [`DomainResult`](crate::shared::result::DomainResult) instead of being
/// raised as a panic. Identity is the `code` field; `description` is never
/// compared.
#[derive(Debug, Clone, Copy, Error, Serialize)]
#[error("{code}: {description}")]
pub struct DomainError {
    /// Stable machine-readable code, `Entity.FailureKind` form
    pub code: &'static str,
    /// Human-readable description, safe to return to clients
    pub description: &'static str,
}

impl DomainError {
    /// Declare a registry constant.
    pub const fn new(code: &'static str, description: &'static str) -> Self {
        Self { code, description }
    }
}

impl PartialEq for DomainError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for DomainError {}

/// Poll lifecycle errors
pub mod poll {
    use super::DomainError;

    /// No poll exists with the requested identifier.
    pub const NOT_FOUND: DomainError =
        DomainError::new("Poll.NotFound", "A poll with the given identifier was not found");

    /// A poll with the same title already exists.
    pub const DUPLICATED_TITLE: DomainError = DomainError::new(
        "Poll.DuplicatedTitle",
        "A poll with the same title already exists",
    );

    /// The submitted title is empty or whitespace.
    pub const EMPTY_TITLE: DomainError =
        DomainError::new("Poll.EmptyTitle", "The poll title must not be empty");

    /// Fewer than two options were submitted.
    pub const TOO_FEW_OPTIONS: DomainError = DomainError::new(
        "Poll.TooFewOptions",
        "A poll must offer at least two options",
    );

    /// Two submitted options share the same label.
    pub const DUPLICATED_OPTION: DomainError = DomainError::new(
        "Poll.DuplicatedOption",
        "Poll options must have distinct labels",
    );
}

/// Vote casting errors
pub mod vote {
    use super::DomainError;

    /// The referenced option does not belong to the poll.
    pub const OPTION_NOT_FOUND: DomainError = DomainError::new(
        "Vote.OptionNotFound",
        "The referenced option does not belong to this poll",
    );

    /// The voter has already cast a vote on this poll.
    pub const ALREADY_CAST: DomainError = DomainError::new(
        "Vote.AlreadyCast",
        "A vote has already been cast on this poll by the same voter",
    );
}
