use thiserror::Error;

use crate::validation::ValidationReport;

/// Errors returned by a recipe transformation. None of them are retryable.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransformError {
    /// The template parameters break the schema or a semantic rule.
    #[error("invalid template parameters: {0}")]
    ParameterValidation(ValidationReport),

    /// No exec-argument template is registered for the runtime.
    #[error("the provided runtime for this lambda function: {runtime} is not supported by Greengrass currently")]
    UnsupportedRuntime { runtime: String },

    /// The default configuration could not be converted to JSON.
    #[error("failed to encode default configuration: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<ValidationReport> for TransformError {
    fn from(report: ValidationReport) -> Self {
        TransformError::ParameterValidation(report)
    }
}

impl TransformError {
    /// The validation report, when this is a parameter validation failure.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            TransformError::ParameterValidation(report) => Some(report),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
