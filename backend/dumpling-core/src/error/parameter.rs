//! Per-item parameter resolution failures.

use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ParameterError {
    #[error("Missing Parameter Error: The parameter \"{name}\" is required {location}")]
    Missing {
        name: &'static str,
        location: ErrorLocation,
    },

    #[error("Parameter Type Error: The parameter \"{name}\" must be a {expected} {location}")]
    InvalidType {
        name: &'static str,
        expected: &'static str,
        location: ErrorLocation,
    },

    #[error("Parameter Range Error: The parameter \"{name}\" must be {}, got {value} {location}", range_text(.min, .max))]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: Option<i64>,
        max: Option<i64>,
        location: ErrorLocation,
    },

    #[error("Parameter Option Error: The value \"{value}\" is not valid for parameter \"{name}\" (expected one of: {}) {location}", join_allowed(.allowed))]
    InvalidOption {
        name: &'static str,
        value: String,
        allowed: &'static [&'static str],
        location: ErrorLocation,
    },
}

impl ParameterError {
    #[track_caller]
    pub fn missing(name: &'static str) -> Self {
        ParameterError::Missing {
            name,
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn invalid_type(name: &'static str, expected: &'static str) -> Self {
        ParameterError::InvalidType {
            name,
            expected,
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn out_of_range(name: &'static str, value: f64, min: Option<i64>, max: Option<i64>) -> Self {
        ParameterError::OutOfRange {
            name,
            value,
            min,
            max,
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn invalid_option(
        name: &'static str,
        value: impl Into<String>,
        allowed: &'static [&'static str],
    ) -> Self {
        ParameterError::InvalidOption {
            name,
            value: value.into(),
            allowed,
            location: ErrorLocation::caller(),
        }
    }

    /// The parameter the error is about.
    pub fn name(&self) -> &'static str {
        match self {
            ParameterError::Missing { name, .. }
            | ParameterError::InvalidType { name, .. }
            | ParameterError::OutOfRange { name, .. }
            | ParameterError::InvalidOption { name, .. } => name,
        }
    }

    /// Human readable message without the source location.
    pub fn message(&self) -> String {
        match self {
            ParameterError::Missing { name, .. } => {
                format!("The parameter \"{name}\" is required")
            }
            ParameterError::InvalidType { name, expected, .. } => {
                format!("The parameter \"{name}\" must be a {expected}")
            }
            ParameterError::OutOfRange {
                name,
                value,
                min,
                max,
                ..
            } => format!(
                "The parameter \"{name}\" must be {}, got {value}",
                range_text(min, max)
            ),
            ParameterError::InvalidOption {
                name,
                value,
                allowed,
                ..
            } => format!(
                "The value \"{value}\" is not valid for parameter \"{name}\" (expected one of: {})",
                join_allowed(allowed)
            ),
        }
    }
}

fn range_text(min: &Option<i64>, max: &Option<i64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("between {min} and {max}"),
        (Some(min), None) => format!("at least {min}"),
        (None, Some(max)) => format!("at most {max}"),
        (None, None) => String::from("within range"),
    }
}

fn join_allowed(allowed: &&'static [&'static str]) -> String {
    allowed.join(", ")
}
