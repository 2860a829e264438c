/**
 * Error Conversion
 *
 * This module provides conversion implementations for API errors, allowing
 * handlers to return them directly and have Axum render the problem
 * document.
 *
 * # Response Format
 *
 * Responses carry `Content-Type: application/problem+json` and the
 * serialized `ProblemDocument` as the body.
 */

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::types::{ApiError, ProblemDocument};

/// Media type for problem-details responses
pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Last-resort body if serialization of a document ever fails.
///
/// Matches the sanitized 500 shape byte for byte.
const FALLBACK_BODY: &str = r#"{"type":"https://tools.ietf.org/html/rfc7231#section-6.6.1","title":"Internal Server Error","status":500}"#;

/// Render a problem document as a complete response.
pub fn problem_response(status: StatusCode, document: &ProblemDocument) -> Response {
    let body = serde_json::to_string(document).unwrap_or_else(|_| FALLBACK_BODY.to_string());

    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, PROBLEM_CONTENT_TYPE)
        .body(Body::from(body))
        .unwrap_or_else(|_| {
            // Builder input is constant; this arm is unreachable in practice.
            let mut response = Response::new(Body::from(FALLBACK_BODY));
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
}

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response.
    ///
    /// The status comes from the calling layer's mapping; the body is the
    /// problem document carrying the domain failures (or the minimal
    /// document when there are none).
    fn into_response(self) -> Response {
        let document = self.problem_document();
        problem_response(self.status, &document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::poll;

    #[test]
    fn test_response_status_and_content_type() {
        let error = ApiError::new(StatusCode::CONFLICT, poll::DUPLICATED_TITLE);
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some(PROBLEM_CONTENT_TYPE)
        );
    }

    #[tokio::test]
    async fn test_response_body_is_the_problem_document() {
        let error = ApiError::new(StatusCode::NOT_FOUND, poll::NOT_FOUND);
        let response = error.into_response();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).expect("body is not valid JSON");

        assert_eq!(value["status"], 404);
        assert_eq!(value["title"], "Not Found");
        assert_eq!(value["errors"][0]["code"], "Poll.NotFound");
    }

    #[test]
    fn test_fallback_body_matches_sanitized_shape() {
        let value: serde_json::Value =
            serde_json::from_str(FALLBACK_BODY).expect("fallback body is not valid JSON");
        let object = value.as_object().expect("expected a JSON object");

        assert_eq!(object.len(), 3);
        assert_eq!(value["title"], "Internal Server Error");
        assert_eq!(value["status"], 500);
    }
}
