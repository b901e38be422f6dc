//! Declarative template schema: field name, JSON type, required flag.
//!
//! Default values are not written into the table. They are read back from
//! [`LambdaTemplateParams::new`], so the schema published to the host and the
//! defaults the model applies are the same values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use lambda_model::{LambdaRuntime, LambdaTemplateParams};

/// JSON type a template parameter must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::String => "string",
            ParameterType::Number => "number",
            ParameterType::Boolean => "boolean",
            ParameterType::Array => "array",
            ParameterType::Object => "object",
        }
    }

    /// Returns true if `value` has this JSON type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ParameterType::String => value.is_string(),
            ParameterType::Number => value.is_number(),
            ParameterType::Boolean => value.is_boolean(),
            ParameterType::Array => value.is_array(),
            ParameterType::Object => value.is_object(),
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the template schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub kind: ParameterType,
    pub required: bool,
    /// Accepted spellings for enumerated string fields; empty means any string.
    pub allowed_values: &'static [&'static str],
}

impl ParameterSpec {
    const fn required(name: &'static str, kind: ParameterType) -> Self {
        Self {
            name,
            kind,
            required: true,
            allowed_values: &[],
        }
    }

    const fn optional(name: &'static str, kind: ParameterType) -> Self {
        Self {
            name,
            kind,
            required: false,
            allowed_values: &[],
        }
    }

    const fn one_of(mut self, allowed_values: &'static [&'static str]) -> Self {
        self.allowed_values = allowed_values;
        self
    }
}

static TEMPLATE_SCHEMA: [ParameterSpec; 17] = [
    ParameterSpec::required("lambdaArn", ParameterType::String),
    ParameterSpec::required("lambdaRuntime", ParameterType::String),
    ParameterSpec::required("lambdaHandler", ParameterType::String),
    ParameterSpec::optional("pubsubTopics", ParameterType::Array),
    ParameterSpec::optional("timeoutInSeconds", ParameterType::Number),
    ParameterSpec::optional("pinned", ParameterType::Boolean),
    ParameterSpec::optional("statusTimeoutInSeconds", ParameterType::Number),
    ParameterSpec::optional("maxQueueSize", ParameterType::Number),
    ParameterSpec::optional("maxInstancesCount", ParameterType::Number),
    ParameterSpec::optional("maxIdleTimeInSeconds", ParameterType::Number),
    ParameterSpec::optional("inputPayloadEncodingType", ParameterType::String)
        .one_of(&["json", "binary"]),
    ParameterSpec::optional("platforms", ParameterType::Array),
    ParameterSpec::optional("componentDependencies", ParameterType::Object),
    ParameterSpec::optional("lambdaArgs", ParameterType::Array),
    ParameterSpec::optional("lambdaEnvironmentVariables", ParameterType::Object),
    ParameterSpec::optional("containerMode", ParameterType::String)
        .one_of(&["GreengrassContainer", "NoContainer"]),
    ParameterSpec::optional("containerParams", ParameterType::Object),
];

/// The template schema, in declaration order.
pub fn template_schema() -> &'static [ParameterSpec] {
    &TEMPLATE_SCHEMA
}

/// Look up a schema row by document key.
pub fn parameter_spec(name: &str) -> Option<&'static ParameterSpec> {
    TEMPLATE_SCHEMA.iter().find(|spec| spec.name == name)
}

/// Schema entry as published to the host's template validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateParameter {
    #[serde(rename = "type")]
    pub kind: ParameterType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

/// Full schema document: parameter name to entry.
pub type TemplateSchema = BTreeMap<String, TemplateParameter>;

/// Default value of every optional parameter, keyed by document key.
///
/// # Errors
///
/// Returns an error if the default parameters cannot be encoded as JSON.
pub fn default_parameter_values() -> serde_json::Result<Map<String, Value>> {
    // Placeholders for the required fields; they are dropped below.
    let params = LambdaTemplateParams::new("null", LambdaRuntime::Java8, "null");
    let mut values = match serde_json::to_value(params)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    for spec in template_schema().iter().filter(|spec| spec.required) {
        values.remove(spec.name);
    }
    Ok(values)
}

/// Build the schema document with default values filled in.
///
/// # Errors
///
/// Returns an error if the default parameters cannot be encoded as JSON.
pub fn schema_with_defaults() -> serde_json::Result<TemplateSchema> {
    let mut defaults = default_parameter_values()?;
    Ok(template_schema()
        .iter()
        .map(|spec| {
            let default_value = if spec.required {
                None
            } else {
                defaults.remove(spec.name)
            };
            (
                spec.name.to_string(),
                TemplateParameter {
                    kind: spec.kind,
                    required: spec.required,
                    default_value,
                },
            )
        })
        .collect())
}
