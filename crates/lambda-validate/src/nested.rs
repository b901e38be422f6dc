//! Checks inside the list and table parameters.
//!
//! Each element is walked on its own and every problem is recorded with its
//! document path, e.g. `platforms[0].os` or
//! `componentDependencies.aws.greengrass.Nucleus.VersionRequirement`.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use lambda_model::{
    DependencyType, FieldViolation, LambdaEventSourceType, LambdaFilesystemPermission,
    PlatformArchitecture, PlatformOs, ValidationReport, ViolationKind,
};

use crate::schema::ParameterType;

/// One key of a nested object.
struct NestedField {
    name: &'static str,
    kind: ParameterType,
    required: bool,
    /// `null` is read as absent.
    nullable: bool,
    /// Decoder for enumerated strings; the error names the accepted spellings.
    decode: Option<fn(&Value) -> Result<(), String>>,
}

impl NestedField {
    const fn required(name: &'static str, kind: ParameterType) -> Self {
        Self {
            name,
            kind,
            required: true,
            nullable: false,
            decode: None,
        }
    }

    const fn optional(name: &'static str, kind: ParameterType) -> Self {
        Self {
            name,
            kind,
            required: false,
            nullable: false,
            decode: None,
        }
    }

    const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    const fn decoded(mut self, decode: fn(&Value) -> Result<(), String>) -> Self {
        self.decode = Some(decode);
        self
    }
}

fn decodes<T: DeserializeOwned>(value: &Value) -> Result<(), String> {
    serde_json::from_value::<T>(value.clone())
        .map(drop)
        .map_err(|error| error.to_string())
}

static PLATFORM_FIELDS: [NestedField; 2] = [
    NestedField::optional("os", ParameterType::String)
        .nullable()
        .decoded(decodes::<PlatformOs>),
    NestedField::optional("architecture", ParameterType::String)
        .nullable()
        .decoded(decodes::<PlatformArchitecture>),
];

static EVENT_SOURCE_FIELDS: [NestedField; 2] = [
    NestedField::required("topic", ParameterType::String),
    NestedField::optional("type", ParameterType::String)
        .decoded(decodes::<LambdaEventSourceType>),
];

static DEPENDENCY_FIELDS: [NestedField; 2] = [
    NestedField::required("VersionRequirement", ParameterType::String),
    NestedField::optional("DependencyType", ParameterType::String)
        .decoded(decodes::<DependencyType>),
];

static CONTAINER_FIELDS: [NestedField; 5] = [
    NestedField::optional("memorySize", ParameterType::Number),
    NestedField::optional("memorySizeInKB", ParameterType::Number),
    NestedField::optional("mountROSysfs", ParameterType::Boolean),
    NestedField::optional("volumes", ParameterType::Array),
    NestedField::optional("devices", ParameterType::Array),
];

static VOLUME_FIELDS: [NestedField; 4] = [
    NestedField::required("sourcePath", ParameterType::String),
    NestedField::required("destinationPath", ParameterType::String),
    NestedField::optional("permission", ParameterType::String)
        .decoded(decodes::<LambdaFilesystemPermission>),
    NestedField::optional("addGroupOwner", ParameterType::Boolean),
];

static DEVICE_FIELDS: [NestedField; 3] = [
    NestedField::required("path", ParameterType::String),
    NestedField::optional("permission", ParameterType::String)
        .decoded(decodes::<LambdaFilesystemPermission>),
    NestedField::optional("addGroupOwner", ParameterType::Boolean),
];

/// Check the inside of a top-level parameter whose own type is already
/// known to be right. Parameters without nested structure are skipped.
pub(crate) fn check_nested(name: &str, value: &Value, report: &mut ValidationReport) {
    match (name, value) {
        ("platforms", Value::Array(items)) => {
            check_elements(name, items, &PLATFORM_FIELDS, report);
        }
        ("pubsubTopics", Value::Array(items)) => {
            check_elements(name, items, &EVENT_SOURCE_FIELDS, report);
        }
        ("lambdaArgs", Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                check_kind(&format!("{name}[{index}]"), ParameterType::String, item, report);
            }
        }
        ("lambdaEnvironmentVariables", Value::Object(entries)) => {
            for (key, entry) in entries {
                check_kind(&format!("{name}.{key}"), ParameterType::String, entry, report);
            }
        }
        ("componentDependencies", Value::Object(entries)) => {
            for (key, entry) in entries {
                check_object(&format!("{name}.{key}"), entry, &DEPENDENCY_FIELDS, report);
            }
        }
        ("containerParams", Value::Object(fields)) => {
            check_fields(name, fields, &CONTAINER_FIELDS, report);
            if fields.contains_key("memorySize") && fields.contains_key("memorySizeInKB") {
                report.push(FieldViolation::new(
                    format!("{name}.memorySizeInKB"),
                    ViolationKind::InvalidValue,
                    "memorySizeInKB is another name for memorySize; set only one",
                ));
            }
            if let Some(Value::Array(volumes)) = fields.get("volumes") {
                check_elements(&format!("{name}.volumes"), volumes, &VOLUME_FIELDS, report);
            }
            if let Some(Value::Array(devices)) = fields.get("devices") {
                check_elements(&format!("{name}.devices"), devices, &DEVICE_FIELDS, report);
            }
        }
        _ => {}
    }
}

fn check_elements(
    path: &str,
    items: &[Value],
    fields: &[NestedField],
    report: &mut ValidationReport,
) {
    for (index, item) in items.iter().enumerate() {
        check_object(&format!("{path}[{index}]"), item, fields, report);
    }
}

fn check_object(
    path: &str,
    value: &Value,
    fields: &[NestedField],
    report: &mut ValidationReport,
) {
    match value {
        Value::Object(object) => check_fields(path, object, fields, report),
        other => report.push(type_mismatch(path, ParameterType::Object, other)),
    }
}

fn check_fields(
    path: &str,
    object: &Map<String, Value>,
    fields: &[NestedField],
    report: &mut ValidationReport,
) {
    for field in fields {
        let field_path = format!("{path}.{}", field.name);
        let value = match object.get(field.name) {
            None => None,
            Some(Value::Null) if field.nullable => None,
            Some(value) => Some(value),
        };
        let Some(value) = value else {
            if field.required {
                report.push(FieldViolation::new(
                    field_path,
                    ViolationKind::Missing,
                    "required field is missing",
                ));
            }
            continue;
        };

        if !check_kind(&field_path, field.kind, value, report) {
            continue;
        }
        if let Some(decode) = field.decode
            && let Err(message) = decode(value)
        {
            report.push(FieldViolation::new(
                field_path,
                ViolationKind::InvalidValue,
                message,
            ));
        }
    }

    for key in object.keys() {
        if !fields.iter().any(|field| field.name == key.as_str()) {
            report.push(FieldViolation::new(
                format!("{path}.{key}"),
                ViolationKind::Unrecognized,
                "not a recognized field",
            ));
        }
    }
}

/// Record a violation unless `value` has type `kind` (numbers must also fit
/// in a `u32`). Returns true if the value passed.
fn check_kind(
    path: &str,
    kind: ParameterType,
    value: &Value,
    report: &mut ValidationReport,
) -> bool {
    if !kind.matches(value) {
        report.push(type_mismatch(path, kind, value));
        return false;
    }
    if kind == ParameterType::Number && !is_u32(value) {
        report.push(FieldViolation::new(
            path,
            ViolationKind::InvalidValue,
            format!("expected a non-negative whole number, found {value}"),
        ));
        return false;
    }
    true
}

fn type_mismatch(path: &str, kind: ParameterType, value: &Value) -> FieldViolation {
    FieldViolation::new(
        path,
        ViolationKind::TypeMismatch,
        format!("expected {kind}, found {}", json_type_name(value)),
    )
}

pub(crate) fn is_u32(value: &Value) -> bool {
    value.as_u64().is_some_and(|n| u32::try_from(n).is_ok())
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
