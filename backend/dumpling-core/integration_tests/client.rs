use crate::helpers::{
    TEST_BEARER, client_for, client_for_url, closed_port_url, truncated_body_server,
};

use dumpling_core::error::{ApiErrorBody, DumplingClientError};

use common::HttpStatusCode;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Every request carries the bearer token and JSON content type.
///
/// **WHY THIS MATTERS**: Without the Authorization header the API answers 401 for every
/// operation; without the content type it cannot read the body.
///
/// **BUG THIS CATCHES**: Would catch default headers not being installed on the client.
#[tokio::test]
async fn given_post_when_sent_then_carries_auth_and_content_type() {
    // GIVEN: A server that only matches fully-authenticated JSON requests
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/search"))
        .and(header("authorization", TEST_BEARER))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "query": "rust" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "organic": [] })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Posting
    let response = client.post("/search", &json!({ "query": "rust" })).await;

    // THEN: Parsed body comes back
    assert_eq!(response.expect("request succeeds"), json!({ "organic": [] }));
}

/// **VALUE**: Base URLs without a trailing slash keep their path.
///
/// **BUG THIS CATCHES**: Would catch `Url::join` replacing `v1` and posting to `/api/search`.
#[tokio::test]
async fn given_base_url_without_trailing_slash_when_endpoint_built_then_path_is_appended() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let url = client.endpoint("/get-youtube-transcript").expect("joins");

    assert!(url.as_str().ends_with("/api/v1/get-youtube-transcript"));
}

#[tokio::test]
async fn given_error_status_when_posted_then_api_error_keeps_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/scrape"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({ "error": "rate limited" })),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client.post("/scrape", &json!({ "url": "https://example.com" })).await;

    match result {
        Err(DumplingClientError::Api { status, body, .. }) => {
            assert_eq!(status, HttpStatusCode(429));
            assert_eq!(body, ApiErrorBody::Json(json!({ "error": "rate limited" })));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_non_json_success_body_when_posted_then_returned_as_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# Example Domain"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client.post("/scrape", &json!({ "url": "https://example.com" })).await;

    assert_eq!(result.expect("succeeds"), json!("# Example Domain"));
}

/// **VALUE**: A request that never gets a response is an `Http` error without status.
///
/// **BUG THIS CATCHES**: Would catch connection failures being reported as API errors,
/// which would attach a status the API never sent.
#[tokio::test]
async fn given_unreachable_server_when_posted_then_http_error_without_status() {
    // GIVEN: A base URL on a closed port
    let client = client_for_url(closed_port_url());

    let result = client.post("/search", &json!({ "query": "rust" })).await;

    match result {
        Err(err @ DumplingClientError::Http { .. }) => assert_eq!(err.status(), None),
        other => panic!("expected Http error, got {other:?}"),
    }
}

/// **VALUE**: An error status survives a response body that cannot be read.
///
/// **BUG THIS CATCHES**: Would catch a failed body read turning a 503 into a transport
/// error and losing the status.
#[tokio::test]
async fn given_error_status_with_truncated_body_when_posted_then_api_error_keeps_status() {
    // GIVEN: A server that answers 503 and cuts the body short
    let client = client_for_url(truncated_body_server("503 Service Unavailable"));

    // WHEN: Posting
    let result = client.post("/search", &json!({ "query": "rust" })).await;

    // THEN: The status is kept, the body is treated as empty
    match result {
        Err(DumplingClientError::Api { status, body, .. }) => {
            assert_eq!(status, HttpStatusCode(503));
            assert_eq!(body, ApiErrorBody::Empty);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_success_status_with_truncated_body_when_posted_then_http_error() {
    let client = client_for_url(truncated_body_server("200 OK"));

    let result = client.post("/search", &json!({ "query": "rust" })).await;

    assert!(matches!(result, Err(DumplingClientError::Http { .. })));
}

/// **VALUE**: The credential test posts the fixed YouTube body.
#[tokio::test]
async fn given_valid_key_when_credential_tested_then_fixed_request_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/get-youtube-transcript"))
        .and(header("authorization", TEST_BEARER))
        .and(body_json(json!({
            "videoUrl": "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "transcript": "..." })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).test_credential().await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn given_rejected_key_when_credential_tested_then_auth_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/get-youtube-transcript"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid API key" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .test_credential()
        .await
        .expect_err("401 must fail");

    assert!(err.status().is_some_and(|status| status.is_auth_error()));
}
