use crate::helpers::{executor_for, items};

use dumpling_core::OutputItem;

use common::HttpStatusCode;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Successful responses pass through verbatim, tagged with their input index.
///
/// **WHY THIS MATTERS**: Downstream workflow steps pair outputs with inputs by index.
/// A shifted index attaches one video's transcript to another row.
#[tokio::test]
async fn given_successful_items_when_executed_then_outputs_are_verbatim_and_paired() {
    // GIVEN: Two operations with distinct responses
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/get-youtube-transcript"))
        .and(body_json(json!({ "videoUrl": "https://www.youtube.com/watch?v=dQw4w9WgXcQ" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transcript": "Never gonna give you up",
            "language": "en"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/scrape"))
        .and(body_json(json!({ "url": "https://example.com", "renderJs": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Example Domain",
            "content": "# Example Domain"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let executor = executor_for(&server, false);

    // WHEN: Executing both
    let output = executor
        .execute(&items(vec![
            json!({
                "resource": "dataApi",
                "operation": "getYouTubeTranscript",
                "videoUrl": "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
            }),
            json!({
                "resource": "webScraping",
                "operation": "scrapeUrl",
                "url": "https://example.com",
                "renderJs": true
            }),
        ]))
        .await
        .expect("run succeeds");

    // THEN: Bodies verbatim, indices preserved
    assert_eq!(
        output,
        vec![
            OutputItem::new(
                json!({ "transcript": "Never gonna give you up", "language": "en" }),
                0
            ),
            OutputItem::new(
                json!({ "title": "Example Domain", "content": "# Example Domain" }),
                1
            ),
        ]
    );
}

/// **VALUE**: In continue mode a 429 becomes an error item and later rows still run.
///
/// **BUG THIS CATCHES**: Would catch continue mode aborting, skipping the remaining rows,
/// or emitting the raw JSON body instead of the `error` member.
#[tokio::test]
async fn given_rate_limit_in_continue_mode_when_executed_then_error_item_and_processing_continues() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/search"))
        .and(body_json(json!({ "query": "first" })))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({ "error": "rate limited" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/search"))
        .and(body_json(json!({ "query": "second" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "organic": ["ok"] })))
        .expect(1)
        .mount(&server)
        .await;
    let executor = executor_for(&server, true);

    let output = executor
        .execute(&items(vec![
            json!({ "operation": "search", "query": "first" }),
            json!({ "operation": "search", "query": "second" }),
        ]))
        .await
        .expect("continue mode never aborts");

    assert_eq!(output.len(), 2);
    assert_eq!(output[0].json, json!({ "error": "rate limited" }));
    assert_eq!(output[0].paired_item.item, 0);
    assert_eq!(output[1].json, json!({ "organic": ["ok"] }));
    assert_eq!(output[1].paired_item.item, 1);
}

/// **VALUE**: Without continue mode the run aborts with message and status.
///
/// **BUG THIS CATCHES**: Would catch the status being dropped or later items being sent
/// after a fatal failure.
#[tokio::test]
async fn given_rate_limit_without_continue_when_executed_then_run_aborts_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/search"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({ "error": "rate limited" })))
        .expect(1)
        .mount(&server)
        .await;
    let executor = executor_for(&server, false);

    let err = executor
        .execute(&items(vec![
            json!({ "operation": "search", "query": "first" }),
            json!({ "operation": "search", "query": "second" }),
        ]))
        .await
        .expect_err("must abort");

    assert_eq!(err.http_code(), Some(HttpStatusCode(429)));
    assert_eq!(err.item_index(), 0);
    assert_eq!(err.message(), "rate limited");
    let rendered = err.to_string();
    assert!(rendered.contains("Dumpling AI API Error: rate limited"));
    assert!(rendered.contains("HTTP 429"));
    assert!(rendered.contains("operation: search"));
}

#[tokio::test]
async fn given_unsupported_operation_without_continue_when_executed_then_run_fails() {
    let server = MockServer::start().await;
    let executor = executor_for(&server, false);

    let err = executor
        .execute(&items(vec![json!({ "operation": "translateVideo" })]))
        .await
        .expect_err("unsupported operation must fail");

    assert!(err.message().contains("is not supported"));
    assert_eq!(err.http_code(), None);
    assert!(err.to_string().contains("operation: translateVideo"));
}

/// **VALUE**: Local failures in continue mode become error items without any request.
#[tokio::test]
async fn given_invalid_items_in_continue_mode_when_executed_then_error_items_without_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;
    let executor = executor_for(&server, true);

    let output = executor
        .execute(&items(vec![
            json!({ "operation": "translateVideo" }),
            json!({ "operation": "search" }),
            json!({ "resource": "webScraping", "url": "https://example.com", "format": "pdf" }),
        ]))
        .await
        .expect("continue mode never aborts");

    assert_eq!(
        output[0].json,
        json!({ "error": "The operation \"translateVideo\" is not supported" })
    );
    assert_eq!(
        output[1].json,
        json!({ "error": "The parameter \"query\" is required" })
    );
    assert!(
        output[2].json["error"]
            .as_str()
            .is_some_and(|message| message.contains("\"pdf\""))
    );
}

#[test]
fn given_output_item_when_serialized_then_uses_paired_item_shape() {
    let item = OutputItem::error("boom", 3);

    let value = serde_json::to_value(&item).expect("serializes");

    assert_eq!(value, json!({ "json": { "error": "boom" }, "pairedItem": { "item": 3 } }));
}
