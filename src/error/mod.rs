//! HTTP Error Translation Module
//!
//! This module defines how domain failures become HTTP responses.
//! Handlers return these types directly; Axum converts them to responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - `ProblemDocument`, `ApiError`, and `StatusMap` definitions
//! - **`conversion`** - Response conversion implementations (IntoResponse)
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Problem document and status-map definitions
//! └── conversion.rs - Response conversion implementations
//! ```
//!
//! # Response Shape
//!
//! Every error response is an `application/problem+json` document:
//!
//! ```json
//! {
//!   "type": "https://tools.ietf.org/html/rfc7231#section-6.5.8",
//!   "title": "Conflict",
//!   "status": 409,
//!   "errors": [{"code": "Poll.DuplicatedTitle", "description": "..."}]
//! }
//! ```
//!
//! The `errors` list is present only for known domain failures. Responses
//! produced for uncaught faults carry no `errors` field and no diagnostic
//! detail of any kind.
//!
//! # Status Mapping
//!
//! There is no global code-to-status table. Each handler declares its own
//! [`StatusMap`](types::StatusMap) naming exactly the failure codes it can
//! see and the status each maps to; a code missing from the table degrades
//! to the sanitized 500 document.

/// Problem document and status-map definitions
pub mod types;

/// Response conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{ApiError, ProblemDocument, StatusMap};
