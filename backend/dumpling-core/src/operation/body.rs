//! Turns resolved parameters into the JSON body of a request.

use crate::error::ParameterError;
use crate::operation::param::{ParamSpec, Placement};

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Build the request body for `params` from the values given in `item`.
///
/// Parameters are visited in declaration order, so a `show_when` condition
/// may only refer to a parameter declared before it. Inactive parameters are
/// neither validated nor sent.
pub fn build_body(
    params: &[ParamSpec],
    item: &Map<String, Value>,
) -> Result<Map<String, Value>, ParameterError> {
    let mut resolved: HashMap<&'static str, Value> = HashMap::with_capacity(params.len());
    let mut body = Map::new();

    for spec in params {
        if let Some(condition) = spec.show_when {
            let active = resolved
                .get(condition.param)
                .is_some_and(|value| condition.equals.matches(value));
            if !active {
                continue;
            }
        }

        let value = spec.resolve(item)?;

        match spec.placement {
            Placement::Selector => {}
            Placement::Body => {
                if spec.required || !spec.default.matches(&value) {
                    body.insert(spec.name.to_string(), value.clone());
                }
            }
            Placement::Nested { object, key } => {
                let nested = body
                    .entry(object)
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Value::Object(members) = nested {
                    members.insert(key.to_string(), value.clone());
                }
            }
        }

        resolved.insert(spec.name, value);
    }

    Ok(body)
}
