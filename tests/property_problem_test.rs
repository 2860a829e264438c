//! Property-based tests for the problem-document pipeline

use std::any::Any;

use axum::http::StatusCode;
use pollboard::error::types::ProblemDocument;
use pollboard::middleware::panic::handle_panic;
use pollboard::shared::error::{poll, vote, DomainError};
use proptest::prelude::*;

/// Every registry constant the service can emit.
const REGISTRY: &[DomainError] = &[
    poll::NOT_FOUND,
    poll::DUPLICATED_TITLE,
    poll::EMPTY_TITLE,
    poll::TOO_FEW_OPTIONS,
    poll::DUPLICATED_OPTION,
    vote::OPTION_NOT_FOUND,
    vote::ALREADY_CAST,
];

proptest! {
    // The generated marker cannot collide with any text in the fixed
    // document, so containment is a faithful leak check.
    #[test]
    fn test_panic_payload_never_leaks_into_the_body(message in "leak-[a-z0-9]{12}") {
        let payload: Box<dyn Any + Send + 'static> = Box::new(message.clone());
        let response = handle_panic(payload);

        prop_assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = tokio_test::block_on(axum::body::to_bytes(response.into_body(), usize::MAX))
            .expect("failed to read body");
        let body = String::from_utf8(bytes.to_vec()).expect("body is not UTF-8");

        prop_assert!(!body.contains(&message));

        let value: serde_json::Value =
            serde_json::from_str(&body).expect("body is not valid JSON");
        let object = value.as_object().expect("expected a JSON object");
        prop_assert_eq!(object.len(), 3);
        prop_assert_eq!(value["title"].as_str(), Some("Internal Server Error"));
        prop_assert_eq!(value["status"].as_u64(), Some(500));
    }

    #[test]
    fn test_any_registry_error_mapped_to_409_keeps_its_code(index in 0usize..7) {
        let error = REGISTRY[index];
        let document = ProblemDocument::with_errors(StatusCode::CONFLICT, vec![error]);
        let value = serde_json::to_value(&document).expect("serialization failed");

        prop_assert_eq!(value["status"].as_u64(), Some(409));
        prop_assert_eq!(value["errors"][0]["code"].as_str(), Some(error.code));
        prop_assert_eq!(
            value["errors"][0]["description"].as_str(),
            Some(error.description)
        );
    }
}
