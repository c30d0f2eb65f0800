//! Parameter specifications: name, type, default and constraints of every
//! field an operation accepts.

use crate::error::ParameterError;

use serde::Serialize;
use serde_json::{Map, Value};

/// Type and constraints of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ParamKind {
    String,
    Boolean,
    Number {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    Options {
        values: &'static [&'static str],
    },
}

/// Declared default of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamDefault {
    Text(&'static str),
    Flag(bool),
    Number(i64),
}

impl ParamDefault {
    pub fn to_value(self) -> Value {
        match self {
            ParamDefault::Text(text) => Value::from(text),
            ParamDefault::Flag(flag) => Value::from(flag),
            ParamDefault::Number(number) => Value::from(number),
        }
    }

    /// Whether `value` is this default. Numbers compare by value, so `5.0`
    /// matches a default of `5`.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            ParamDefault::Text(text) => value.as_str() == Some(text),
            ParamDefault::Flag(flag) => value.as_bool() == Some(flag),
            ParamDefault::Number(number) => value.as_f64() == Some(number as f64),
        }
    }
}

/// Where a resolved value ends up in the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Placement {
    /// Top-level member, left out when it equals the default.
    Body,
    /// Member of a nested object. Always written once the parameter is active.
    Nested {
        object: &'static str,
        key: &'static str,
    },
    /// Steers which other parameters are active. Never sent.
    Selector,
}

/// Activates a parameter only when another parameter has a given value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowWhen {
    pub param: &'static str,
    pub equals: ParamDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamSpec {
    pub name: &'static str,
    pub display_name: &'static str,
    #[serde(flatten)]
    pub kind: ParamKind,
    pub default: ParamDefault,
    pub required: bool,
    pub placement: Placement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_when: Option<ShowWhen>,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub description: &'static str,
}

impl ParamSpec {
    const fn base(
        name: &'static str,
        display_name: &'static str,
        kind: ParamKind,
        default: ParamDefault,
    ) -> Self {
        Self {
            name,
            display_name,
            kind,
            default,
            required: false,
            placement: Placement::Body,
            show_when: None,
            description: "",
        }
    }

    pub const fn string(name: &'static str, display_name: &'static str, default: &'static str) -> Self {
        Self::base(name, display_name, ParamKind::String, ParamDefault::Text(default))
    }

    pub const fn boolean(name: &'static str, display_name: &'static str, default: bool) -> Self {
        Self::base(name, display_name, ParamKind::Boolean, ParamDefault::Flag(default))
    }

    pub const fn number(
        name: &'static str,
        display_name: &'static str,
        default: i64,
        min: Option<i64>,
        max: Option<i64>,
    ) -> Self {
        Self::base(
            name,
            display_name,
            ParamKind::Number { min, max },
            ParamDefault::Number(default),
        )
    }

    pub const fn options(
        name: &'static str,
        display_name: &'static str,
        values: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self::base(
            name,
            display_name,
            ParamKind::Options { values },
            ParamDefault::Text(default),
        )
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn selector(mut self) -> Self {
        self.placement = Placement::Selector;
        self
    }

    pub const fn nested(mut self, object: &'static str, key: &'static str) -> Self {
        self.placement = Placement::Nested { object, key };
        self
    }

    pub const fn shown_when(mut self, param: &'static str, equals: ParamDefault) -> Self {
        self.show_when = Some(ShowWhen { param, equals });
        self
    }

    pub const fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Resolve this parameter from an item, falling back to the default and
    /// enforcing the declared type and constraints.
    pub fn resolve(&self, parameters: &Map<String, Value>) -> Result<Value, ParameterError> {
        let provided = parameters.get(self.name).filter(|value| !value.is_null());

        let value = match provided {
            Some(value) => value.clone(),
            None if self.required => return Err(ParameterError::missing(self.name)),
            None => self.default.to_value(),
        };

        match self.kind {
            ParamKind::String => {
                let text = match value {
                    Value::String(text) => text,
                    // Numeric ids (place CIDs) are often typed as numbers
                    Value::Number(number) => number.to_string(),
                    _ => return Err(ParameterError::invalid_type(self.name, "string")),
                };
                if self.required && text.trim().is_empty() {
                    return Err(ParameterError::missing(self.name));
                }
                Ok(Value::String(text))
            }
            ParamKind::Boolean => match value {
                Value::Bool(_) => Ok(value),
                _ => Err(ParameterError::invalid_type(self.name, "boolean")),
            },
            ParamKind::Number { min, max } => {
                let number = value
                    .as_f64()
                    .ok_or_else(|| ParameterError::invalid_type(self.name, "number"))?;
                let below = min.is_some_and(|min| number < min as f64);
                let above = max.is_some_and(|max| number > max as f64);
                if below || above {
                    return Err(ParameterError::out_of_range(self.name, number, min, max));
                }
                Ok(value)
            }
            ParamKind::Options { values } => {
                let choice = value
                    .as_str()
                    .ok_or_else(|| ParameterError::invalid_type(self.name, "string"))?;
                if !values.contains(&choice) {
                    return Err(ParameterError::invalid_option(self.name, choice, values));
                }
                Ok(value)
            }
        }
    }
}
