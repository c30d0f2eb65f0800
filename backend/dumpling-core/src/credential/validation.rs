//! API key format checks, run before the key is ever sent.
//!
//! Dumpling AI does not document a key format, so only obviously broken
//! values are rejected.

use crate::error::{CredentialError, KeyValidationFailure};

use common::RedactedApiKey;

const MAX_KEY_LENGTH: usize = 500;

#[derive(Debug)]
pub enum ValidationResult {
    Valid,
    Invalid(KeyValidationFailure),
}

pub fn validate(key: &str) -> ValidationResult {
    let trimmed = key.trim();

    if trimmed.is_empty() {
        return ValidationResult::Invalid(KeyValidationFailure::Empty);
    }

    if trimmed.len() > MAX_KEY_LENGTH {
        return ValidationResult::Invalid(KeyValidationFailure::TooLong {
            max: MAX_KEY_LENGTH,
            actual: trimmed.len(),
        });
    }

    if let Some(pattern) = detect_placeholder(trimmed) {
        return ValidationResult::Invalid(KeyValidationFailure::PlaceholderDetected { pattern });
    }

    if !is_valid_key_chars(trimmed) {
        return ValidationResult::Invalid(KeyValidationFailure::InvalidCharacters);
    }

    ValidationResult::Valid
}

/// Validate and wrap in a [`RedactedApiKey`].
#[track_caller]
pub fn validate_and_wrap(key: String) -> Result<RedactedApiKey, CredentialError> {
    match validate(&key) {
        ValidationResult::Valid => Ok(RedactedApiKey::new(key)),
        ValidationResult::Invalid(reason) => Err(CredentialError::key_validation(reason)),
    }
}

/// Template values that make up the whole key.
const EXACT_PLACEHOLDERS: &[&str] = &[
    "...",
    "xxx",
    "placeholder",
    "changeme",
    "replace-me",
    "your-api-key",
    "your_api_key",
];

/// Template prefixes such as `your-api-key-here` or `xxxx-xxxx`.
const PLACEHOLDER_PREFIXES: &[&str] = &["your-", "your_", "<your", "xxxx"];

/// Returns the matched pattern if the key looks like a template value.
///
/// Only the whole key or its start is compared: random keys can contain
/// runs such as `XXX` anywhere.
fn detect_placeholder(key: &str) -> Option<&'static str> {
    let lower = key.to_lowercase();

    if let Some(pattern) = EXACT_PLACEHOLDERS.iter().copied().find(|pattern| lower == *pattern) {
        return Some(pattern);
    }

    if let Some(prefix) = PLACEHOLDER_PREFIXES
        .iter()
        .copied()
        .find(|prefix| lower.starts_with(prefix))
    {
        return Some(prefix);
    }

    let mut chars = key.chars();
    if key.len() >= 10 {
        if let Some(first) = chars.next() {
            if chars.all(|c| c == first) {
                return Some("repeated_char");
            }
        }
    }

    None
}

/// Alphanumeric, hyphen, underscore, period, colon.
fn is_valid_key_chars(key: &str) -> bool {
    key.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}
