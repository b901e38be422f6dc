//! Validation of Lambda template parameters.
//!
//! - **schema**: the declarative parameter table and the schema document
//!   published to the host, defaults included
//! - **document**: checks on the raw template document (batch reporting),
//!   nested lists and tables included
//! - **rules**: semantic rules on typed parameters, optionally strict

pub mod document;
mod nested;
pub mod options;
pub mod rules;
pub mod schema;

pub use document::{DOCUMENT_FIELD, apply_defaults, parse_parameters, validate_document};
pub use options::ValidationOptions;
pub use rules::{EMPTY_PLATFORMS_MESSAGE, validate_params};
pub use schema::{
    ParameterSpec, ParameterType, TemplateParameter, TemplateSchema, default_parameter_values,
    parameter_spec, schema_with_defaults, template_schema,
};
