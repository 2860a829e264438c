//! Poll Backend Functionality
//!
//! This module contains the poll store and the HTTP handlers built on it.
//!
//! # Overview
//!
//! - **`state`** - the in-memory `PollStore` with uniqueness enforcement
//! - **`handlers`** - HTTP handlers for poll creation, retrieval, deletion,
//!   and vote casting
//!
//! The store stands in for a database: it owns the title-uniqueness
//! constraint and the one-vote-per-voter constraint, and reports violations
//! as registry errors through `DomainResult` rather than panicking.

/// In-memory poll store
pub mod state;

/// HTTP handlers for the poll API
pub mod handlers;

// Re-export commonly used types
pub use state::PollStore;
