// Unit tests for credential handling and key validation

use crate::credential::validation::{ValidationResult, validate};
use crate::credential::{API_KEY_ENV, DumplingAiCredential};
use crate::error::{CredentialError, KeyValidationFailure};

use reqwest::header::AUTHORIZATION;
use serial_test::serial;

/// **VALUE**: The credential renders as a bearer Authorization header.
///
/// **BUG THIS CATCHES**: Would catch a missing "Bearer " prefix or the header not being
/// marked sensitive.
#[test]
fn given_valid_key_when_header_built_then_bearer_authorization() {
    let credential = DumplingAiCredential::new("dmp_live_0123456789abcdef").expect("valid key");

    let (name, value) = credential.authorization_header().expect("header builds");

    assert_eq!(name, AUTHORIZATION);
    assert_eq!(value.to_str().ok(), Some("Bearer dmp_live_0123456789abcdef"));
    assert!(value.is_sensitive());
}

#[test]
fn given_credential_when_debug_formatted_then_key_is_redacted() {
    let credential = DumplingAiCredential::new("dmp_live_0123456789abcdef").expect("valid key");

    let debug = format!("{:?}", credential);

    assert!(!debug.contains("0123456789abcdef"));
}

#[test]
fn given_malformed_keys_when_validated_then_specific_failures() {
    assert!(matches!(
        validate("   "),
        ValidationResult::Invalid(KeyValidationFailure::Empty)
    ));
    assert!(matches!(
        validate("your-api-key-here"),
        ValidationResult::Invalid(KeyValidationFailure::PlaceholderDetected { .. })
    ));
    assert!(matches!(
        validate("aaaaaaaaaaaaaaaa"),
        ValidationResult::Invalid(KeyValidationFailure::PlaceholderDetected {
            pattern: "repeated_char"
        })
    ));
    assert!(matches!(
        validate("key with spaces"),
        ValidationResult::Invalid(KeyValidationFailure::InvalidCharacters)
    ));
    assert!(matches!(
        validate(&"ab".repeat(300)),
        ValidationResult::Invalid(KeyValidationFailure::TooLong { .. })
    ));
    assert!(matches!(validate("dmp_live_0123456789abcdef"), ValidationResult::Valid));
}

/// **VALUE**: Placeholders are matched against the whole key or its start only.
///
/// **WHY THIS MATTERS**: Generated keys are random; one containing `XXX` or `...` in the
/// middle is a real key and must reach the API.
///
/// **BUG THIS CATCHES**: Would catch a substring match rejecting valid keys.
#[test]
fn given_placeholder_text_inside_random_key_when_validated_then_valid() {
    for key in ["dmp_7fXXXa91c0e4", "k9.x...2ab:77", "sk-ab12xxx9fz3"] {
        assert!(
            matches!(validate(key), ValidationResult::Valid),
            "{key} should be accepted"
        );
    }

    for (key, pattern) in [
        ("xxx", "xxx"),
        ("...", "..."),
        ("YOUR_API_KEY", "your_api_key"),
        ("xxxx-xxxx-xxxx", "xxxx"),
        ("your-dumpling-key", "your-"),
    ] {
        match validate(key) {
            ValidationResult::Invalid(KeyValidationFailure::PlaceholderDetected {
                pattern: found,
            }) => assert_eq!(found, pattern, "{key}"),
            other => panic!("{key} should be a placeholder, got {other:?}"),
        }
    }
}

/// **VALUE**: Loading from the environment reports a missing variable by name.
///
/// **WHY THIS MATTERS**: "DUMPLING_AI_API_KEY is not set" tells the user exactly what
/// to export; a generic auth failure from the API would not.
#[test]
#[serial]
fn given_env_var_absent_when_loaded_then_missing_env_error() {
    // SAFETY: serialized with other env-mutating tests
    unsafe { std::env::remove_var(API_KEY_ENV) };

    let result = DumplingAiCredential::from_env();

    match result {
        Err(CredentialError::MissingEnv { var, .. }) => assert_eq!(var, API_KEY_ENV),
        Err(other) => panic!("expected MissingEnv, got {other}"),
        Ok(_) => {
            // A .env file next to the test binary may provide the key
        }
    }
}

#[test]
#[serial]
fn given_env_var_set_when_loaded_then_credential_uses_trimmed_value() {
    // SAFETY: serialized with other env-mutating tests
    unsafe { std::env::set_var(API_KEY_ENV, "  dmp_test_abcdef123456  ") };

    let credential = DumplingAiCredential::from_env().expect("key loads");

    assert_eq!(credential.api_key().as_str(), "dmp_test_abcdef123456");

    unsafe { std::env::remove_var(API_KEY_ENV) };
}
