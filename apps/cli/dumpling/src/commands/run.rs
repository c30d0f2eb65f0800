use crate::error::DumplingError;

use dumpling_core::credential::DumplingAiCredential;
use dumpling_core::error::CoreError;
use dumpling_core::{
    DumplingClient, DumplingConfig, ExecutionOptions, InputItem, NodeExecutor, OutputItem,
};

use common::ErrorLocation;

use std::io::Read;
use log::{debug, error, info};
use serde_json::Value;

/// Parse input items from JSON.
///
/// Accepts an array of items or a single item. An item is either a bare
/// parameter object or a workflow item wrapping one under `json`.
pub fn read_items(mut reader: impl Read) -> Result<Vec<InputItem>, DumplingError> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(|e| DumplingError::Input {
            message: format!("Failed to read input: {e}"),
            location: ErrorLocation::caller(),
        })?;

    let value: Value = serde_json::from_str(&contents).map_err(|e| DumplingError::Input {
        message: format!("Input is not valid JSON: {e}"),
        location: ErrorLocation::caller(),
    })?;

    let rows = match value {
        Value::Array(rows) => rows,
        single @ Value::Object(_) => vec![single],
        other => {
            return Err(DumplingError::Input {
                message: format!("Expected an item or an array of items, got {other}"),
                location: ErrorLocation::caller(),
            });
        }
    };

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| match unwrap_workflow_item(row) {
            Value::Object(parameters) => Ok(InputItem::new(parameters)),
            other => Err(DumplingError::Input {
                message: format!("Item {index} is not an object: {other}"),
                location: ErrorLocation::caller(),
            }),
        })
        .collect()
}

/// `{"json": {...}}` → `{...}`; anything else is returned unchanged.
fn unwrap_workflow_item(row: Value) -> Value {
    match row {
        Value::Object(mut members) if members.len() == 1 && members.contains_key("json") => {
            match members.remove("json") {
                Some(inner @ Value::Object(_)) => inner,
                Some(other) => {
                    members.insert("json".to_string(), other);
                    Value::Object(members)
                }
                None => Value::Object(members),
            }
        }
        other => other,
    }
}

/// Run items through the node and return the output items.
///
/// `continue_on_fail` adds to, never overrides, the config's own flag.
pub async fn run_items(
    config: &DumplingConfig,
    credential: &DumplingAiCredential,
    items: &[InputItem],
    continue_on_fail: bool,
) -> Result<Vec<OutputItem>, DumplingError> {
    let client = DumplingClient::new(config, credential).map_err(CoreError::from)?;

    let mut options = ExecutionOptions::from(config);
    options.continue_on_fail |= continue_on_fail;
    debug!("Execution options: {:?}", options);

    let executor = NodeExecutor::new(client, options);
    let output = executor.execute(items).await.map_err(|e| {
        error!("Run aborted: {}", e);
        CoreError::from(e)
    })?;

    info!("Run produced {} output item(s)", output.len());
    Ok(output)
}

pub fn render_output(output: &[OutputItem], pretty: bool) -> Result<String, DumplingError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(output)
    } else {
        serde_json::to_string(output)
    };

    rendered.map_err(|e| DumplingError::Dumpling {
        message: format!("Failed to serialize output: {e}"),
        location: ErrorLocation::caller(),
    })
}
