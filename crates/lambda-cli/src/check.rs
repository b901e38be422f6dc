//! Checks behind the `validate` and `runtimes` subcommands.

use anyhow::Result;

use lambda_model::{FieldViolation, RecipeEnvelope, TransformError, ValidationReport, ViolationKind};
use lambda_transform::{LambdaTransformer, RecipeTransformer, exec_arg_templates};
use lambda_validate::ValidationOptions;

/// Placeholder shown for the handler slot in the runtime listing.
pub const HANDLER_PLACEHOLDER: &str = "<handler>";

/// Run the whole transformation and collect what it rejects.
///
/// An unknown runtime is reported as a `lambdaRuntime` violation so every
/// rejected field reads the same way. Returns an empty report for a
/// parameter file that transforms cleanly.
///
/// # Errors
///
/// Returns an error only for failures unrelated to the parameters, such as
/// a recipe that cannot be encoded.
pub fn check_envelope(
    envelope: &RecipeEnvelope,
    options: ValidationOptions,
) -> Result<ValidationReport> {
    let transformer = LambdaTransformer::new().with_options(options);
    match transformer.transform_envelope(envelope) {
        Ok(_) => Ok(ValidationReport::new()),
        Err(TransformError::ParameterValidation(report)) => Ok(report),
        Err(error @ TransformError::UnsupportedRuntime { .. }) => {
            Ok(ValidationReport::from_iter([FieldViolation::new(
                "lambdaRuntime",
                ViolationKind::InvalidValue,
                error.to_string(),
            )]))
        }
        Err(error) => Err(error.into()),
    }
}

/// One `(runtime, launch arguments)` row per supported runtime.
pub fn runtime_rows() -> Vec<(String, String)> {
    exec_arg_templates()
        .iter()
        .map(|template| {
            (
                template.runtime.to_string(),
                template.render(HANDLER_PLACEHOLDER).join(" "),
            )
        })
        .collect()
}
