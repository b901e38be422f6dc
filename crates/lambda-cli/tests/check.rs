//! Integration tests for the `validate` and `runtimes` checks.

use lambda_cli::check::{HANDLER_PLACEHOLDER, check_envelope, runtime_rows};
use lambda_cli::input::{InputFormat, parse_envelope};
use lambda_model::{LambdaRuntime, RecipeEnvelope, ViolationKind};
use lambda_validate::ValidationOptions;

fn envelope(template_parameters: &str) -> RecipeEnvelope {
    let text = format!(
        r#"{{
            "ComponentName": "com.example.HelloWorld",
            "ComponentVersion": "1.0.0",
            "TemplateParameters": {template_parameters}
        }}"#
    );
    parse_envelope(&text, InputFormat::Json).expect("parse envelope")
}

#[test]
fn unsupported_runtime_is_a_runtime_violation() {
    let envelope = envelope(
        r#"{
            "lambdaArn": "arn:aws:lambda:us-west-2:111111111111:function:helloWorld:1",
            "lambdaRuntime": "fortran",
            "lambdaHandler": "main"
        }"#,
    );
    let report = check_envelope(&envelope, ValidationOptions::new()).expect("check");

    assert_eq!(report.fields(), vec!["lambdaRuntime"]);
    assert_eq!(report.violations[0].kind, ViolationKind::InvalidValue);
    assert!(report.violations[0].message.contains("fortran"));
}

#[test]
fn clean_parameters_give_an_empty_report() {
    let envelope = envelope(
        r#"{
            "lambdaArn": "arn:aws:lambda:us-west-2:111111111111:function:helloWorld:1",
            "lambdaRuntime": "python3.8",
            "lambdaHandler": "hello_world.handler"
        }"#,
    );
    let report = check_envelope(&envelope, ValidationOptions::strict()).expect("check");
    assert!(report.is_empty(), "unexpected violations: {report}");
}

#[test]
fn every_rejected_field_is_listed() {
    let envelope = envelope(
        r#"{
            "lambdaRuntime": "python3.8",
            "platforms": [{"os": "solaris"}],
            "pinned": "yes"
        }"#,
    );
    let report = check_envelope(&envelope, ValidationOptions::new()).expect("check");
    assert_eq!(
        report.fields(),
        vec!["lambdaArn", "lambdaHandler", "pinned", "platforms[0].os"]
    );
}

#[test]
fn range_rules_follow_options() {
    let envelope = envelope(
        r#"{
            "lambdaArn": "arn:aws:lambda:us-west-2:111111111111:function:helloWorld:1",
            "lambdaRuntime": "java8",
            "lambdaHandler": "com.example.Hello::handle",
            "timeoutInSeconds": 0
        }"#,
    );

    let lenient = check_envelope(&envelope, ValidationOptions::new()).expect("check");
    assert!(lenient.is_empty());

    let strict = check_envelope(&envelope, ValidationOptions::strict()).expect("check");
    assert_eq!(strict.fields(), vec!["timeoutInSeconds"]);
    assert_eq!(strict.violations[0].kind, ViolationKind::OutOfRange);
}

#[test]
fn runtime_listing_covers_every_runtime() {
    let rows = runtime_rows();
    assert_eq!(rows.len(), LambdaRuntime::ALL.len());
    for (runtime, launch_args) in &rows {
        assert!(
            launch_args.contains(HANDLER_PLACEHOLDER),
            "{runtime} launch arguments lack the handler: {launch_args}"
        );
    }
    assert!(rows.iter().any(|(runtime, _)| runtime == "python3.8"));
}
