//! Greengrass Lambda template and recipe data model.
//!
//! - **params**: the template parameters a user writes, with their defaults
//! - **recipe**: the component recipe produced from them
//! - **configuration**: the recipe's default configuration block
//! - **validation** / **error**: violation reports and transformation errors

pub mod configuration;
pub mod constants;
pub mod enums;
pub mod error;
pub mod params;
pub mod platform;
pub mod recipe;
pub mod validation;

pub use configuration::{ContainerParams, DefaultConfiguration, LambdaExecutionParameters};
pub use enums::{
    ComponentType, DependencyType, LambdaEventSourceType, LambdaFilesystemPermission,
    LambdaInputPayloadEncodingType, LambdaIsolationMode, LambdaRuntime, RecipeFormatVersion,
    Unarchive,
};
pub use error::{Result, TransformError};
pub use params::{
    DependencyProperties, LambdaDeviceMount, LambdaEventSource, LambdaTemplateParams,
    LambdaVolumeMount, TemplateContainerParams,
};
pub use platform::{Platform, PlatformArchitecture, PlatformOs};
pub use recipe::{
    ComponentArtifact, ComponentConfiguration, ComponentRecipe, Lifecycle, LifecycleStep,
    PlatformSpecificManifest, RecipeEnvelope,
};
pub use validation::{FieldViolation, ValidationReport, ViolationKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_report_lists_every_field() {
        let report: ValidationReport = vec![
            FieldViolation::new("lambdaArn", ViolationKind::Missing, "required field is missing"),
            FieldViolation::new(
                "platforms",
                ViolationKind::InvalidValue,
                "at least one platform is expected to be set by caller",
            ),
        ]
        .into_iter()
        .collect();

        assert_eq!(report.len(), 2);
        assert_eq!(report.fields(), vec!["lambdaArn", "platforms"]);
        let error = TransformError::from(report);
        assert_eq!(
            error.to_string(),
            "invalid template parameters: lambdaArn: required field is missing; \
             platforms: at least one platform is expected to be set by caller"
        );
    }

    #[test]
    fn unsupported_runtime_names_runtime() {
        let error = TransformError::UnsupportedRuntime {
            runtime: "fortran".to_string(),
        };
        assert!(error.to_string().contains("fortran"));
        assert!(error.report().is_none());
    }
}
