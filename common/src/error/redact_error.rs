use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a secret-holding type is asked to leave the process in
/// serialized form.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Secret Serialization Error: {type_name} refuses to serialize; read it with as_str() {location}")]
    SerializationRefused {
        type_name: &'static str,
        location: ErrorLocation,
    },
}
