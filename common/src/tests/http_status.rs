use crate::HttpStatusCode;

/// **VALUE**: Verifies the statuses the CLI maps onto dedicated exit codes.
///
/// **BUG THIS CATCHES**: Would catch 404 being treated as a rejected key, or 429 being
/// missed as a rate limit.
#[test]
fn given_status_codes_when_classified_then_auth_and_rate_limit_are_exact() {
    assert!(HttpStatusCode(401).is_auth_error());
    assert!(HttpStatusCode(403).is_auth_error());
    assert!(!HttpStatusCode(404).is_auth_error());
    assert!(HttpStatusCode(429).is_rate_limited());
    assert!(!HttpStatusCode(430).is_rate_limited());
}

#[test]
fn given_status_code_when_displayed_then_renders_bare_number() {
    assert_eq!(HttpStatusCode::from(429).to_string(), "429");
}
