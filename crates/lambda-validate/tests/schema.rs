//! Tests for the published template schema and document checks.

use serde_json::{Map, Value, json};

use lambda_validate::{
    ParameterType, ValidationOptions, apply_defaults, parse_parameters, schema_with_defaults,
    template_schema, validate_document, validate_params,
};

fn document(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("test documents are objects"),
    }
}

#[test]
fn schema_entry_snapshot() {
    let schema = schema_with_defaults().expect("build schema");
    insta::assert_json_snapshot!(schema["timeoutInSeconds"], @r#"
    {
      "type": "number",
      "required": false,
      "defaultValue": 3
    }
    "#);
}

#[test]
fn required_fields_are_the_three_identity_fields() {
    let required: Vec<&str> = template_schema()
        .iter()
        .filter(|spec| spec.required)
        .map(|spec| spec.name)
        .collect();
    assert_eq!(required, vec!["lambdaArn", "lambdaRuntime", "lambdaHandler"]);
    assert!(
        template_schema()
            .iter()
            .filter(|spec| spec.required)
            .all(|spec| spec.kind == ParameterType::String)
    );
}

#[test]
fn schema_document_serializes_with_host_keys() {
    let schema = schema_with_defaults().expect("build schema");
    let value = serde_json::to_value(&schema).expect("serialize schema");

    assert_eq!(value["lambdaArn"], json!({"type": "string", "required": true}));
    assert_eq!(value["inputPayloadEncodingType"]["defaultValue"], "json");
    assert_eq!(value["componentDependencies"]["defaultValue"], json!({}));
    assert_eq!(value["lambdaArgs"]["defaultValue"], json!([]));
    assert_eq!(value.as_object().map(Map::len), Some(template_schema().len()));
}

#[test]
fn defaulted_document_reads_into_model() {
    let doc = document(json!({
        "lambdaArn": "arn:aws:lambda:us-west-2:111111111111:function:fn1",
        "lambdaRuntime": "python3.8",
        "lambdaHandler": "app.handler",
        "timeoutInSeconds": 30,
    }));
    assert!(validate_document(&doc).is_empty());

    let params = parse_parameters(&apply_defaults(&doc).expect("apply defaults"))
        .expect("parse parameters");
    assert_eq!(params.timeout_in_seconds, 30);
    assert_eq!(params.max_queue_size, 1000);
    assert!(validate_params(&params, &ValidationOptions::strict()).is_empty());
}

#[test]
fn report_message_lists_every_field() {
    let doc = document(json!({"lambdaRuntime": "python3.7", "pinned": 1}));
    let report = validate_document(&doc);
    let message = report.to_string();

    assert!(message.contains("lambdaArn: required field is missing"));
    assert!(message.contains("lambdaHandler: required field is missing"));
    assert!(message.contains("pinned: expected boolean, found number"));
}
