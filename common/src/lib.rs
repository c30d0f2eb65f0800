//! Shared building blocks for the Dumpling AI workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error locations, secret handling, status codes
//! - **dumpling-core**: operation table, request building, HTTP execution
//! - **dumpling**: command-line host wiring everything together
//!
//! Nothing here knows about Dumpling AI itself.

pub mod error;
pub mod http_status;
pub mod redacted_key;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;

#[cfg(test)]
mod tests;
