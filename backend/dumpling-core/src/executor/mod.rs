//! Sequential per-item execution with continue-on-failure support.

pub mod normalize;

use crate::client::DumplingClient;
use crate::config::DumplingConfig;
use crate::error::{ExecutionError, ItemError};
use crate::operation::{OPERATION_PARAM, PreparedRequest, RESOURCE_PARAM, Resource};

use normalize::normalize;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// One input row: parameter name to value, including the `resource` and
/// `operation` selectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputItem {
    parameters: Map<String, Value>,
}

impl InputItem {
    pub fn new(parameters: Map<String, Value>) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &Map<String, Value> {
        &self.parameters
    }

    /// Operation name as given, or the resource's default when absent.
    pub fn operation_name(&self) -> String {
        if let Some(name) = self.parameters.get(OPERATION_PARAM).and_then(Value::as_str) {
            return name.to_string();
        }
        let resource = match self.parameters.get(RESOURCE_PARAM).and_then(Value::as_str) {
            Some(name) => Resource::parse(name),
            None => Some(Resource::default()),
        };
        resource
            .map(|resource| resource.default_operation().as_str().to_string())
            .unwrap_or_default()
    }
}

impl From<Map<String, Value>> for InputItem {
    fn from(parameters: Map<String, Value>) -> Self {
        Self::new(parameters)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedItem {
    pub item: usize,
}

/// One output row, tagged with the index of the input row it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputItem {
    pub json: Value,
    pub paired_item: PairedItem,
}

impl OutputItem {
    pub fn new(json: Value, item: usize) -> Self {
        Self {
            json,
            paired_item: PairedItem { item },
        }
    }

    /// `{ "error": <message> }`, emitted in place of a failed row.
    pub fn error(message: impl Into<String>, item: usize) -> Self {
        Self::new(json!({ "error": message.into() }), item)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionOptions {
    pub continue_on_fail: bool,
}

impl From<&DumplingConfig> for ExecutionOptions {
    fn from(config: &DumplingConfig) -> Self {
        Self {
            continue_on_fail: config.continue_on_fail,
        }
    }
}

pub struct NodeExecutor {
    client: DumplingClient,
    options: ExecutionOptions,
}

impl NodeExecutor {
    pub fn new(client: DumplingClient, options: ExecutionOptions) -> Self {
        Self { client, options }
    }

    /// Process every item in order, one request at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError`] for the first failing item unless
    /// continue-on-failure is set, in which case failures become
    /// `{ "error": ... }` output items.
    pub async fn execute(&self, items: &[InputItem]) -> Result<Vec<OutputItem>, ExecutionError> {
        info!(
            "Executing {} item(s) (continue on fail: {})",
            items.len(),
            self.options.continue_on_fail
        );

        let mut output = Vec::with_capacity(items.len());
        let mut failures = 0usize;

        for (index, item) in items.iter().enumerate() {
            match self.execute_item(item).await {
                Ok(json) => output.push(OutputItem::new(json, index)),
                Err(error) => {
                    let normalized = normalize(&error);

                    if self.options.continue_on_fail {
                        warn!("Item {} failed, continuing: {}", index, normalized.message);
                        failures += 1;
                        output.push(OutputItem::error(normalized.message, index));
                        continue;
                    }

                    return Err(ExecutionError::api(
                        normalized.message,
                        item.operation_name(),
                        index,
                        normalized.http_code,
                        error,
                    ));
                }
            }
        }

        info!(
            "Finished {} item(s), {} failed",
            output.len(),
            failures
        );
        Ok(output)
    }

    async fn execute_item(&self, item: &InputItem) -> Result<Value, ItemError> {
        let request = PreparedRequest::from_parameters(item.parameters())?;
        debug!(
            "Sending {} with {} body field(s)",
            request.descriptor.operation,
            request.body.as_object().map_or(0, Map::len)
        );
        Ok(self
            .client
            .post(request.descriptor.path, &request.body)
            .await?)
    }
}
