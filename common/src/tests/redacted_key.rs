use crate::RedactedApiKey;

/// **VALUE**: Verifies the key never shows up in Debug or Display output.
///
/// **WHY THIS MATTERS**: Credentials get logged alongside request metadata. A leaking
/// Debug impl would write the Dumpling AI key into every log file.
///
/// **BUG THIS CATCHES**: Would catch a derived Debug replacing the manual impl.
#[test]
fn given_api_key_when_formatted_then_value_is_hidden() {
    // GIVEN: A key
    let key = RedactedApiKey::new("sk_live_abcdef123456");

    // WHEN: Formatting
    let debug = format!("{:?}", key);
    let display = format!("{}", key);

    // THEN: Neither contains the secret
    assert!(!debug.contains("abcdef"));
    assert!(!display.contains("abcdef"));
    assert!(debug.contains("REDACTED"));
}

/// **VALUE**: Verifies serialization is refused.
///
/// **BUG THIS CATCHES**: Would catch a derived Serialize sneaking the key into JSON output.
#[test]
fn given_api_key_when_serialized_then_fails() {
    let key = RedactedApiKey::new("sk_live_abcdef123456");

    let result = serde_json::to_string(&key);

    let err = result.expect_err("Serialization must be refused");
    assert!(err.to_string().contains("RedactedApiKey refuses to serialize"));
    assert!(!err.to_string().contains("abcdef"));
}

#[test]
fn given_padded_key_when_wrapped_then_whitespace_is_trimmed() {
    let key = RedactedApiKey::new("  abc123\n");

    assert_eq!(key.as_str(), "abc123");
    assert_eq!(key.len(), 6);
    assert_eq!(key.bearer(), "Bearer abc123");
}
