//! Recipe generation for Lambda components.

use std::time::Instant;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, info, info_span};

use lambda_model::constants::AWS_LAMBDA_PUBLISHER;
use lambda_model::{
    ComponentRecipe, ComponentType, FieldViolation, LambdaTemplateParams, RecipeEnvelope,
    RecipeFormatVersion, Result, ValidationReport, ViolationKind,
};
use lambda_validate::{
    DOCUMENT_FIELD, TemplateSchema, ValidationOptions, apply_defaults, schema_with_defaults,
    validate_document, validate_params,
};

use crate::configuration::component_configuration;
use crate::dependencies::merge_dependencies;
use crate::lifecycle::build_lifecycle;
use crate::manifest::{PlatformData, stage_platforms};
use crate::runtime::{exec_args_for, resolve_runtime};

/// Turns a templated recipe into a complete component recipe.
///
/// Implementors publish the schema their parameters follow, read a raw
/// parameter document into their typed parameters, and build the recipe
/// from those.
pub trait RecipeTransformer {
    /// Typed template parameters.
    type Params: DeserializeOwned;

    /// Schema document describing every accepted parameter.
    fn template_schema(&self) -> Result<TemplateSchema>;

    /// Check a raw parameter document and read it into [`Self::Params`].
    fn parse_parameters(&self, document: &Map<String, Value>) -> Result<Self::Params>;

    /// Build the recipe from typed parameters.
    fn transform(&self, envelope: &RecipeEnvelope, params: &Self::Params)
    -> Result<ComponentRecipe>;

    /// Parse `document` and build the recipe. Nothing is built unless the
    /// document passes every check.
    fn transform_document(
        &self,
        envelope: &RecipeEnvelope,
        document: &Value,
    ) -> Result<ComponentRecipe> {
        let Value::Object(map) = document else {
            return Err(ValidationReport::from_iter([FieldViolation::new(
                DOCUMENT_FIELD,
                ViolationKind::TypeMismatch,
                "expected an object of template parameters",
            )])
            .into());
        };
        let params = self.parse_parameters(map)?;
        self.transform(envelope, &params)
    }

    /// Build the recipe from the parameters carried by the envelope itself.
    fn transform_envelope(&self, envelope: &RecipeEnvelope) -> Result<ComponentRecipe> {
        let params = self.parse_parameters(&envelope.template_parameters)?;
        self.transform(envelope, &params)
    }
}

/// Generates `aws.greengrass.lambda` component recipes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LambdaTransformer {
    options: ValidationOptions,
}

impl LambdaTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }
}

impl RecipeTransformer for LambdaTransformer {
    type Params = LambdaTemplateParams;

    fn template_schema(&self) -> Result<TemplateSchema> {
        Ok(schema_with_defaults()?)
    }

    fn parse_parameters(&self, document: &Map<String, Value>) -> Result<LambdaTemplateParams> {
        validate_document(document).into_result()?;
        // The schema only knows the runtime is a string.
        if let Some(runtime) = document.get("lambdaRuntime").and_then(Value::as_str) {
            resolve_runtime(runtime)?;
        }
        let filled = apply_defaults(document)?;
        Ok(lambda_validate::parse_parameters(&filled)?)
    }

    fn transform(
        &self,
        envelope: &RecipeEnvelope,
        params: &LambdaTemplateParams,
    ) -> Result<ComponentRecipe> {
        let span = info_span!(
            "transform",
            component = %envelope.component_name,
            version = %envelope.component_version,
            runtime = %params.lambda_runtime
        );
        let _guard = span.enter();
        let start = Instant::now();

        validate_params(params, &self.options).into_result()?;

        let mut exec_args = exec_args_for(&params.lambda_handler, params.lambda_runtime)?;
        exec_args.extend(params.exec_args.iter().cloned());
        debug!(exec_args = exec_args.len(), "exec arguments resolved");

        let lifecycle = build_lifecycle(params, &exec_args)?;
        let component_configuration = component_configuration(params)?;
        let component_dependencies = merge_dependencies(&params.component_dependencies);
        let manifests: Vec<_> = stage_platforms(&params.platforms)
            .into_iter()
            .map(PlatformData::build_manifest)
            .collect();

        info!(
            manifests = manifests.len(),
            dependencies = component_dependencies.len(),
            duration_ms = start.elapsed().as_millis(),
            "recipe generated"
        );

        Ok(ComponentRecipe {
            recipe_format_version: RecipeFormatVersion::Jan25_2020,
            component_name: envelope.component_name.clone(),
            component_version: envelope.component_version.clone(),
            component_description: envelope.component_description.clone(),
            component_publisher: AWS_LAMBDA_PUBLISHER.to_string(),
            component_source: Some(params.lambda_arn.clone()),
            component_type: ComponentType::Lambda,
            component_dependencies,
            component_configuration,
            manifests,
            lifecycle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_model::{LambdaRuntime, TransformError};
    use serde_json::json;

    fn envelope() -> RecipeEnvelope {
        RecipeEnvelope::new("com.example.HelloWorld", "1.0.0")
    }

    #[test]
    fn non_object_document_is_rejected() {
        let error = LambdaTransformer::new()
            .transform_document(&envelope(), &json!(["lambdaArn"]))
            .unwrap_err();
        assert_eq!(error.report().unwrap().fields(), vec![DOCUMENT_FIELD]);
    }

    #[test]
    fn unknown_runtime_stops_before_parsing() {
        let document = json!({
            "lambdaArn": "arn:aws:lambda:us-west-2:111111111111:function:fn1",
            "lambdaRuntime": "fortran",
            "lambdaHandler": "h",
        });
        let error = LambdaTransformer::new()
            .transform_document(&envelope(), &document)
            .unwrap_err();
        assert!(matches!(error, TransformError::UnsupportedRuntime { .. }));
    }

    #[test]
    fn strict_options_reject_low_timeouts() {
        let mut params = LambdaTemplateParams::new("arn", LambdaRuntime::Java8, "h");
        params.status_timeout_in_seconds = 5;

        assert!(LambdaTransformer::new().transform(&envelope(), &params).is_ok());
        let error = LambdaTransformer::new()
            .with_options(ValidationOptions::strict())
            .transform(&envelope(), &params)
            .unwrap_err();
        assert_eq!(
            error.report().unwrap().fields(),
            vec!["statusTimeoutInSeconds"]
        );
    }
}
