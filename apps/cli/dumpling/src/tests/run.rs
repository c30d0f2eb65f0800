// Unit tests for input parsing and output rendering

use crate::commands::run::{read_items, render_output};
use crate::error::DumplingError;

use dumpling_core::OutputItem;

use serde_json::json;

#[test]
fn given_array_of_bare_items_when_read_then_each_becomes_an_item() {
    let input = r#"[{"operation":"search","query":"a"},{"operation":"search","query":"b"}]"#;

    let items = read_items(input.as_bytes()).expect("parses");

    assert_eq!(items.len(), 2);
    assert_eq!(items[1].parameters()["query"], json!("b"));
}

/// **VALUE**: Workflow-style `{"json": {...}}` items are unwrapped.
///
/// **BUG THIS CATCHES**: Would catch exported workflow data being read as an item whose
/// only parameter is `json`, which would then default to a YouTube request.
#[test]
fn given_workflow_items_when_read_then_json_member_is_unwrapped() {
    let input = r#"{"json":{"resource":"webScraping","url":"https://example.com"}}"#;

    let items = read_items(input.as_bytes()).expect("parses");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].parameters()["url"], json!("https://example.com"));
}

#[test]
fn given_non_object_input_when_read_then_input_error() {
    assert!(matches!(read_items("42".as_bytes()), Err(DumplingError::Input { .. })));
    assert!(matches!(read_items("[1]".as_bytes()), Err(DumplingError::Input { .. })));
    assert!(matches!(read_items("{".as_bytes()), Err(DumplingError::Input { .. })));
}

#[test]
fn given_output_items_when_rendered_then_compact_json_array() {
    let output = vec![OutputItem::error("rate limited", 0)];

    let rendered = render_output(&output, false).expect("renders");

    assert_eq!(
        rendered,
        r#"[{"json":{"error":"rate limited"},"pairedItem":{"item":0}}]"#
    );
}
