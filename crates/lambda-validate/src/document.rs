//! Checks on the raw template document, before it is read into the model.
//!
//! Every problem is collected; nothing stops at the first bad field.

use serde_json::{Map, Value};
use tracing::debug;

use lambda_model::{FieldViolation, LambdaTemplateParams, ValidationReport, ViolationKind};

use crate::nested::{check_nested, is_u32, json_type_name};
use crate::rules::EMPTY_PLATFORMS_MESSAGE;
use crate::schema::{ParameterType, default_parameter_values, parameter_spec, template_schema};

/// Field name used when the document as a whole cannot be read.
pub const DOCUMENT_FIELD: &str = "templateParameters";

/// Check a template document against the schema table.
///
/// Reports unrecognized keys, missing required keys, type mismatches,
/// numbers that are not non-negative 32-bit integers, and enumerated strings
/// outside their accepted spellings. List and table parameters are checked
/// element by element, with violations recorded under paths such as
/// `platforms[0].os`. A `null` value counts as absent, except for
/// `platforms`, which must not be null.
pub fn validate_document(document: &Map<String, Value>) -> ValidationReport {
    let mut report = ValidationReport::new();

    for spec in template_schema() {
        let value = match document.get(spec.name) {
            Some(Value::Null) if spec.name == "platforms" => {
                report.push(FieldViolation::new(
                    spec.name,
                    ViolationKind::InvalidValue,
                    EMPTY_PLATFORMS_MESSAGE,
                ));
                continue;
            }
            None | Some(Value::Null) => {
                if spec.required {
                    report.push(FieldViolation::new(
                        spec.name,
                        ViolationKind::Missing,
                        "required field is missing",
                    ));
                }
                continue;
            }
            Some(value) => value,
        };

        if !spec.kind.matches(value) {
            report.push(FieldViolation::new(
                spec.name,
                ViolationKind::TypeMismatch,
                format!("expected {}, found {}", spec.kind, json_type_name(value)),
            ));
            continue;
        }

        if spec.kind == ParameterType::Number && !is_u32(value) {
            report.push(FieldViolation::new(
                spec.name,
                ViolationKind::InvalidValue,
                format!("expected a non-negative whole number, found {value}"),
            ));
            continue;
        }

        if let Some(text) = value.as_str()
            && !spec.allowed_values.is_empty()
            && !spec.allowed_values.contains(&text)
        {
            report.push(FieldViolation::new(
                spec.name,
                ViolationKind::InvalidValue,
                format!(
                    "expected one of {}, found \"{text}\"",
                    spec.allowed_values.join(", ")
                ),
            ));
            continue;
        }

        check_nested(spec.name, value, &mut report);
    }

    for key in document.keys() {
        if parameter_spec(key).is_none() {
            report.push(FieldViolation::new(
                key.as_str(),
                ViolationKind::Unrecognized,
                "not a recognized template parameter",
            ));
        }
    }

    debug!(
        fields = document.len(),
        violations = report.len(),
        "template document checked"
    );
    report
}

/// Copy of `document` with every absent or `null` optional parameter set to
/// its schema default.
///
/// Run [`validate_document`] first: it rejects a `null` platform list, which
/// this function would otherwise replace.
///
/// # Errors
///
/// Returns an error if the default parameters cannot be encoded as JSON.
pub fn apply_defaults(document: &Map<String, Value>) -> serde_json::Result<Map<String, Value>> {
    let mut merged = document.clone();
    for (key, default) in default_parameter_values()? {
        if merged.get(&key).is_none_or(Value::is_null) {
            merged.insert(key, default);
        }
    }
    Ok(merged)
}

/// Read a checked document into typed parameters.
///
/// [`validate_document`] already reports nested problems with their paths,
/// so an error here only comes from a document that skipped that check. It
/// is reported as a single violation carrying the decoder's message.
pub fn parse_parameters(
    document: &Map<String, Value>,
) -> Result<LambdaTemplateParams, ValidationReport> {
    serde_json::from_value(Value::Object(document.clone())).map_err(|error| {
        ValidationReport::from_iter([FieldViolation::new(
            DOCUMENT_FIELD,
            ViolationKind::InvalidValue,
            error.to_string(),
        )])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test documents are objects"),
        }
    }

    #[test]
    fn minimal_document_passes() {
        let doc = document(json!({
            "lambdaArn": "arn:aws:lambda:us-west-2:111111111111:function:fn1",
            "lambdaRuntime": "python3.7",
            "lambdaHandler": "h.handler",
        }));
        assert!(validate_document(&doc).is_empty());
    }

    #[test]
    fn every_problem_is_reported() {
        let doc = document(json!({
            "lambdaRuntime": 37,
            "timeoutInSeconds": -1,
            "pinned": "yes",
            "containerMode": "Docker",
            "memory": 128,
        }));
        let report = validate_document(&doc);

        assert_eq!(
            report.fields(),
            vec![
                "lambdaArn",
                "lambdaRuntime",
                "lambdaHandler",
                "timeoutInSeconds",
                "pinned",
                "containerMode",
                "memory",
            ]
        );
        assert_eq!(report.violations[0].kind, ViolationKind::Missing);
        assert_eq!(report.violations[1].kind, ViolationKind::TypeMismatch);
        assert_eq!(report.violations[1].message, "expected string, found number");
        assert_eq!(report.violations[3].kind, ViolationKind::InvalidValue);
        assert_eq!(report.violations[6].kind, ViolationKind::Unrecognized);
    }

    #[test]
    fn null_optional_is_replaced_by_default() {
        let doc = document(json!({
            "lambdaArn": "arn",
            "lambdaRuntime": "java8",
            "lambdaHandler": "Handler::handle",
            "maxQueueSize": null,
            "pinned": false,
        }));
        assert!(validate_document(&doc).is_empty());

        let merged = apply_defaults(&doc).unwrap();
        assert_eq!(merged["maxQueueSize"], json!(1000));
        assert_eq!(merged["pinned"], json!(false));
        assert_eq!(merged["platforms"], json!([{"os": "*"}]));
    }

    #[test]
    fn null_platforms_are_rejected() {
        let doc = document(json!({
            "lambdaArn": "arn",
            "lambdaRuntime": "java8",
            "lambdaHandler": "Handler::handle",
            "platforms": null,
        }));
        let report = validate_document(&doc);
        assert_eq!(report.fields(), vec!["platforms"]);
        assert_eq!(report.violations[0].message, EMPTY_PLATFORMS_MESSAGE);
    }

    #[test]
    fn nested_errors_carry_their_paths() {
        let doc = document(json!({
            "lambdaArn": "arn",
            "lambdaRuntime": "java8",
            "lambdaHandler": "Handler::handle",
            "platforms": [{"os": "solaris"}],
            "containerParams": {"devices": [{"path": "/dev/x", "permission": "rwx"}]},
            "componentDependencies": {"x": {"DependencyType": "SOFT"}},
        }));
        let report = validate_document(&doc);
        assert_eq!(
            report.fields(),
            vec![
                "platforms[0].os",
                "componentDependencies.x.VersionRequirement",
                "containerParams.devices[0].permission",
            ]
        );
    }

    #[test]
    fn unchecked_document_is_reported_against_document() {
        let doc = document(json!({
            "lambdaArn": "arn",
            "lambdaRuntime": "java8",
            "lambdaHandler": "Handler::handle",
            "containerParams": {"devices": [{"path": "/dev/x", "permission": "rwx"}]},
        }));
        let report = parse_parameters(&doc).unwrap_err();
        assert_eq!(report.fields(), vec![DOCUMENT_FIELD]);
        assert!(report.violations[0].message.contains("rwx"));
    }
}
