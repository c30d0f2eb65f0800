// Unit tests for operation lookup and selector handling

use crate::error::{ItemError, ParameterError};
use crate::operation::{OPERATIONS, Operation, OperationDescriptor, PreparedRequest, Resource};

use std::collections::HashSet;

use serde_json::{Map, Value, json};

fn params(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("test parameters must be an object, got {other}"),
    }
}

/// **VALUE**: Every operation has exactly one descriptor, and paths are unique.
///
/// **BUG THIS CATCHES**: Would catch a copy-pasted descriptor pointing two operations at
/// the same endpoint, or an operation added to the enum but missing from the table.
#[test]
fn given_operation_table_when_inspected_then_each_operation_appears_once() {
    let operations: HashSet<Operation> = OPERATIONS.iter().map(|d| d.operation).collect();
    let paths: HashSet<&str> = OPERATIONS.iter().map(|d| d.path).collect();

    assert_eq!(OPERATIONS.len(), Operation::ALL.len());
    assert_eq!(operations.len(), Operation::ALL.len());
    assert_eq!(paths.len(), OPERATIONS.len());
}

#[test]
fn given_each_operation_when_looked_up_then_path_matches_api() {
    let expected = [
        (Resource::DataApi, Operation::GetGoogleReviews, "/get-google-reviews"),
        (Resource::DataApi, Operation::GetTikTokTranscript, "/get-tiktok-transcript"),
        (Resource::DataApi, Operation::GetYouTubeTranscript, "/get-youtube-transcript"),
        (Resource::DataApi, Operation::Search, "/search"),
        (Resource::DataApi, Operation::SearchNews, "/search-news"),
        (Resource::DataApi, Operation::SearchPlaces, "/search-places"),
        (Resource::WebScraping, Operation::ScrapeUrl, "/scrape"),
    ];

    for (resource, operation, path) in expected {
        let descriptor = OperationDescriptor::find(resource, operation)
            .unwrap_or_else(|| panic!("missing descriptor for {resource}/{operation}"));
        assert_eq!(descriptor.path, path);
    }
}

/// **VALUE**: Declared parameter order lets every `show_when` see its controller.
///
/// **WHY THIS MATTERS**: The body builder resolves parameters in order. A condition that
/// refers to a later parameter would silently deactivate its field.
#[test]
fn given_conditional_params_when_inspected_then_controller_is_declared_earlier() {
    for descriptor in OPERATIONS {
        for (position, spec) in descriptor.params.iter().enumerate() {
            if let Some(condition) = spec.show_when {
                let controller = descriptor.params[..position]
                    .iter()
                    .any(|earlier| earlier.name == condition.param);
                assert!(
                    controller,
                    "{}.{} depends on {} which is not declared before it",
                    descriptor.operation, spec.name, condition.param
                );
            }
        }
    }
}

#[test]
fn given_selector_names_when_parsed_then_round_trip_through_as_str() {
    for resource in Resource::ALL {
        assert_eq!(Resource::parse(resource.as_str()), Some(resource));
    }
    for operation in Operation::ALL {
        assert_eq!(Operation::parse(operation.as_str()), Some(operation));
    }
    assert_eq!(Resource::parse("documents"), None);
}

#[test]
fn given_no_selectors_when_prepared_then_defaults_to_youtube_transcript() {
    let request = PreparedRequest::from_parameters(&params(json!({
        "videoUrl": "https://youtu.be/abc"
    })))
    .expect("default operation should resolve");

    assert_eq!(request.descriptor.operation, Operation::GetYouTubeTranscript);
}

/// **VALUE**: Unknown operations fail loudly with the "not supported" message.
///
/// **BUG THIS CATCHES**: Would catch a fallback that silently sends nothing or picks a
/// default operation for an unrecognized name.
#[test]
fn given_unknown_operation_when_prepared_then_fails_as_unsupported() {
    let result = PreparedRequest::from_parameters(&params(json!({
        "resource": "dataApi",
        "operation": "getInstagramTranscript"
    })));

    let err = result.expect_err("unknown operation must fail");
    assert!(matches!(err, ItemError::UnsupportedOperation { .. }));
    assert!(err.to_string().contains("\"getInstagramTranscript\" is not supported"));
}

#[test]
fn given_operation_under_wrong_resource_when_prepared_then_fails_as_unsupported() {
    let result = PreparedRequest::from_parameters(&params(json!({
        "resource": "webScraping",
        "operation": "search",
        "query": "rust"
    })));

    assert!(matches!(
        result,
        Err(ItemError::UnsupportedOperation { .. })
    ));
}

/// **VALUE**: An unknown resource is reported by name, even without an operation.
///
/// **BUG THIS CATCHES**: Would catch the resource name being dropped and the item failing
/// with an empty operation name instead.
#[test]
fn given_unknown_resource_when_prepared_then_fails_naming_the_resource() {
    for parameters in [
        json!({ "resource": "documentConversion", "operation": "convertToPdf" }),
        json!({ "resource": "documentConversion" }),
    ] {
        let result = PreparedRequest::from_parameters(&params(parameters));

        match result {
            Err(ItemError::UnsupportedResource { resource, .. }) => {
                assert_eq!(resource, "documentConversion");
            }
            other => panic!("expected UnsupportedResource, got {other:?}"),
        }
    }
}

#[test]
fn given_non_string_selector_when_prepared_then_fails_with_type_error() {
    let result = PreparedRequest::from_parameters(&params(json!({ "operation": 3 })));

    assert!(matches!(
        result,
        Err(ItemError::Parameter(ParameterError::InvalidType { name: "operation", .. }))
    ));
}

/// **VALUE**: The descriptor table serializes with the field names a form renderer needs.
#[test]
fn given_descriptor_when_serialized_then_exposes_defaults_and_constraints() {
    let descriptor = OperationDescriptor::find(Resource::DataApi, Operation::GetGoogleReviews)
        .expect("reviews descriptor");

    let value = serde_json::to_value(descriptor).expect("descriptor serializes");

    assert_eq!(value["operation"], "getGoogleReviews");
    assert_eq!(value["resource"], "dataApi");
    let reviews = value["params"]
        .as_array()
        .and_then(|params| params.iter().find(|p| p["name"] == "reviews"))
        .expect("reviews param");
    assert_eq!(reviews["type"], "number");
    assert_eq!(reviews["default"], 10);
    assert_eq!(reviews["min"], 1);
    assert_eq!(reviews["max"], 4490);
}
