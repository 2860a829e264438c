/**
 * Panic Boundary
 *
 * This module provides the single fault boundary wrapping the entire
 * request pipeline. A handler that panics transitions the request from
 * normal pass-through to faulted exactly once: the panic payload is logged
 * with full detail to the operator-facing sink, and the client receives a
 * fixed, minimal 500 document. The original operation is never retried.
 *
 * # Sanitization
 *
 * The response body never includes the panic message, type names, or file
 * paths. Diagnostic detail goes to the tracing sink only.
 */

use std::any::Any;

use axum::{http::StatusCode, response::Response};
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::conversion::problem_response;
use crate::error::types::ProblemDocument;

/// Handler signature expected by `CatchPanicLayer::custom`
pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// The boundary layer, applied once around the whole router.
pub fn boundary_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

/// Convert an uncaught panic into the sanitized 500 response.
///
/// Logs the panic payload at error level and answers with the fixed
/// `{"type": ..., "title": "Internal Server Error", "status": 500}` body.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic_detail(payload.as_ref());
    tracing::error!(panic = %detail, "uncaught panic while handling request");

    let document = ProblemDocument::from_status(StatusCode::INTERNAL_SERVER_ERROR);
    problem_response(StatusCode::INTERNAL_SERVER_ERROR, &document)
}

/// Extract a printable message from a panic payload.
///
/// Panics carry `String` or `&str` payloads in practice; anything else is
/// reported as opaque rather than formatted.
fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "non-string panic payload".to_string()
    }
}
