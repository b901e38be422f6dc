//! Greengrass Lambda recipe generation.
//!
//! - **runtime**: exec-argument templates per Lambda runtime
//! - **manifest**: per-platform manifest staging
//! - **lifecycle**: the `setenv` / `startup` / `shutdown` block
//! - **configuration**: the default configuration read by the launcher
//! - **dependencies**: the launcher, runtimes and token exchange service
//! - **transformer**: the [`RecipeTransformer`] seam and its Lambda implementation

pub mod configuration;
pub mod dependencies;
pub mod keyed;
pub mod lifecycle;
pub mod manifest;
pub mod runtime;
pub mod transformer;

pub use configuration::{component_configuration, default_configuration};
pub use dependencies::{injected_dependencies, merge_dependencies};
pub use keyed::index_keyed;
pub use lifecycle::build_lifecycle;
pub use manifest::{PlatformData, lambda_artifact, stage_platforms};
pub use runtime::{
    ExecArg, ExecArgTemplate, exec_arg_template, exec_arg_templates, exec_args_for,
    resolve_runtime,
};
pub use transformer::{LambdaTransformer, RecipeTransformer};
