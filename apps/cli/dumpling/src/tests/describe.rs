// Unit tests for the describe command

use crate::commands::describe::describe;
use crate::error::DumplingError;

use serde_json::Value;

#[test]
fn given_no_filter_when_described_then_lists_all_operations() {
    let json = describe(None).expect("describe succeeds");

    let value: Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value.as_array().map(Vec::len), Some(7));
}

#[test]
fn given_web_scraping_filter_when_described_then_only_scrape_url() {
    let json = describe(Some("webScraping")).expect("describe succeeds");

    let value: Value = serde_json::from_str(&json).expect("valid JSON");
    let operations: Vec<&str> = value
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|d| d["operation"].as_str())
        .collect();
    assert_eq!(operations, vec!["scrapeUrl"]);
}

#[test]
fn given_unknown_resource_when_described_then_input_error() {
    let result = describe(Some("documents"));

    assert!(matches!(result, Err(DumplingError::Input { .. })));
}
