/**
 * HTTP Error Types
 *
 * This module defines the problem-document response shape and the types
 * handlers use to translate domain failures into HTTP statuses.
 *
 * # Types
 *
 * - `ProblemDocument` - the serialized error body (RFC 7807 shape)
 * - `ApiError` - a failure paired with its HTTP status, returnable from handlers
 * - `StatusMap` - a caller-declared code-to-status table
 */

use axum::http::StatusCode;
use serde::Serialize;

use crate::shared::error::DomainError;

/// The externally emitted error document.
///
/// Field order matters: the serialized body is
/// `{"type": ..., "title": ..., "status": ..., "errors": [...]}` with
/// `errors` omitted entirely when empty, so the uncaught-fault body contains
/// exactly the three fixed fields.
#[derive(Debug, Clone, Serialize)]
pub struct ProblemDocument {
    /// RFC reference URI identifying the status class
    #[serde(rename = "type")]
    pub type_uri: &'static str,
    /// Canonical reason phrase for the status
    pub title: &'static str,
    /// HTTP status code
    pub status: u16,
    /// Known domain failures, omitted for uncaught faults
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<DomainError>,
}

impl ProblemDocument {
    /// Build the minimal document for a status, with no error entries.
    pub fn from_status(status: StatusCode) -> Self {
        Self {
            type_uri: type_uri(status),
            title: title(status),
            status: status.as_u16(),
            errors: Vec::new(),
        }
    }

    /// Build a document carrying known domain failures.
    pub fn with_errors(status: StatusCode, errors: Vec<DomainError>) -> Self {
        Self {
            errors,
            ..Self::from_status(status)
        }
    }
}

/// RFC 7231 section reference for a status class.
///
/// Unlisted statuses fall back to `about:blank`, the problem-details
/// default for "the type is the status code".
fn type_uri(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "https://tools.ietf.org/html/rfc7231#section-6.5.1",
        StatusCode::NOT_FOUND => "https://tools.ietf.org/html/rfc7231#section-6.5.4",
        StatusCode::CONFLICT => "https://tools.ietf.org/html/rfc7231#section-6.5.8",
        StatusCode::INTERNAL_SERVER_ERROR => "https://tools.ietf.org/html/rfc7231#section-6.6.1",
        _ => "about:blank",
    }
}

/// Canonical reason phrase for a status.
fn title(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Error")
}

/// A domain failure paired with the HTTP status the calling layer chose.
///
/// Handlers return `Result<_, ApiError>`; the `IntoResponse` impl in
/// [`conversion`](super::conversion) renders the problem document.
///
/// # Example
///
/// ```rust
/// use axum::http::StatusCode;
/// use pollboard::error::types::ApiError;
/// use pollboard::shared::error::poll;
///
/// let error = ApiError::new(StatusCode::CONFLICT, poll::DUPLICATED_TITLE);
/// assert_eq!(error.status, StatusCode::CONFLICT);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status chosen by the calling layer
    pub status: StatusCode,
    /// The domain failures to report; empty for sanitized responses
    pub errors: Vec<DomainError>,
}

impl ApiError {
    /// Pair a single domain failure with a status.
    pub fn new(status: StatusCode, error: DomainError) -> Self {
        Self {
            status,
            errors: vec![error],
        }
    }

    /// A bare status with no error entries (sanitized 500, fallback 404).
    pub fn from_status(status: StatusCode) -> Self {
        Self {
            status,
            errors: Vec::new(),
        }
    }

    /// The document this error serializes to.
    pub fn problem_document(&self) -> ProblemDocument {
        ProblemDocument::with_errors(self.status, self.errors.clone())
    }
}

/// An explicit code-to-status table, declared by the calling layer.
///
/// Each handler names the failure codes its operation can produce and the
/// status class each maps to. There is deliberately no global table: the
/// same code may map differently in different operations, and a handler
/// consulting codes it never produces is a smell the table makes visible.
///
/// # Example
///
/// ```rust
/// use axum::http::StatusCode;
/// use pollboard::error::types::StatusMap;
/// use pollboard::shared::error::poll;
///
/// const STATUS: StatusMap = StatusMap::new(&[
///     (poll::DUPLICATED_TITLE.code, StatusCode::CONFLICT),
/// ]);
///
/// let error = STATUS.resolve(poll::DUPLICATED_TITLE);
/// assert_eq!(error.status, StatusCode::CONFLICT);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StatusMap {
    entries: &'static [(&'static str, StatusCode)],
}

impl StatusMap {
    /// Declare a table from `(code, status)` pairs.
    pub const fn new(entries: &'static [(&'static str, StatusCode)]) -> Self {
        Self { entries }
    }

    /// Resolve a failure to the status the table declares for its code.
    ///
    /// A code absent from the table is a wiring bug between the operation
    /// and its table; it is logged and degrades to the sanitized 500
    /// document rather than leaking an unclassified failure.
    pub fn resolve(&self, error: DomainError) -> ApiError {
        match self.entries.iter().find(|(code, _)| *code == error.code) {
            Some((_, status)) => ApiError::new(*status, error),
            None => {
                tracing::warn!(code = error.code, "no status mapping declared for failure code");
                ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}
