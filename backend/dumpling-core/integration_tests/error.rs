use dumpling_core::error::{
    ApiErrorBody, CredentialError, DumplingClientError, ItemError, KeyValidationFailure,
    ParameterError,
};

use serde_json::json;

/// **VALUE**: Errors render their kind, message and source location.
///
/// **WHY THIS MATTERS**: When a run aborts, the log line must point at the code that
/// raised the error, not just say "API Error".
///
/// **BUG THIS CATCHES**: Would catch a removed `location` field or `#[track_caller]`.
#[test]
fn given_api_error_when_formatted_then_includes_status_body_and_location() {
    let err = DumplingClientError::api(503, ApiErrorBody::Json(json!({ "error": "down" })));

    let rendered = err.to_string();

    assert!(rendered.starts_with("API Error: HTTP 503"));
    assert!(rendered.contains("\"down\""));
    assert!(rendered.contains("error.rs"), "location should point at this file: {rendered}");
}

#[test]
fn given_parameter_error_when_formatted_then_location_points_at_caller() {
    let err = ParameterError::missing("url");

    let rendered = err.to_string();

    assert!(rendered.starts_with("Missing Parameter Error: The parameter \"url\" is required"));
    assert!(rendered.contains("error.rs"));
}

#[test]
fn given_key_validation_error_when_formatted_then_reason_is_readable() {
    let err = CredentialError::key_validation(KeyValidationFailure::PlaceholderDetected {
        pattern: "xxx",
    });

    assert!(err.to_string().contains("detected placeholder pattern 'xxx'"));
}

#[test]
fn given_parameter_error_when_wrapped_as_item_error_then_display_is_transparent() {
    let inner = ParameterError::invalid_type("page", "number");
    let expected = inner.to_string();

    let err = ItemError::from(inner);

    assert_eq!(err.to_string(), expected);
}
