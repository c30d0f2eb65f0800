use crate::error::DumplingError;

use dumpling_core::operation::{OPERATIONS, OperationDescriptor, Resource};

use common::ErrorLocation;

/// The operation table as JSON, optionally limited to one resource.
pub fn describe(resource: Option<&str>) -> Result<String, DumplingError> {
    let filter = match resource {
        Some(name) => Some(Resource::parse(name).ok_or_else(|| DumplingError::Input {
            message: format!("Unknown resource \"{name}\" (expected dataApi or webScraping)"),
            location: ErrorLocation::caller(),
        })?),
        None => None,
    };

    let descriptors: Vec<&OperationDescriptor> = OPERATIONS
        .iter()
        .filter(|descriptor| filter.is_none_or(|resource| descriptor.resource == resource))
        .collect();

    serde_json::to_string_pretty(&descriptors).map_err(|e| DumplingError::Dumpling {
        message: format!("Failed to serialize operation table: {e}"),
        location: ErrorLocation::caller(),
    })
}
