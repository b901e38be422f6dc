//! Component dependencies every Lambda recipe carries.

use std::collections::BTreeMap;

use lambda_model::constants::{
    LAMBDA_LAUNCHER_DEPENDENCY_NAME, LAMBDA_LAUNCHER_DEPENDENCY_VERSION_REQUIREMENTS,
    LAMBDA_RUNTIME_DEPENDENCY_NAME, LAMBDA_RUNTIME_DEPENDENCY_VERSION_REQUIREMENTS,
    LAMBDA_TOKEN_EXCHANGE_SERVICE_DEPENDENCY_NAME,
    LAMBDA_TOKEN_EXCHANGE_SERVICE_VERSION_REQUIREMENTS,
};
use lambda_model::{DependencyProperties, DependencyType};

/// Launcher, runtimes and token exchange service, in that order.
pub fn injected_dependencies() -> [(&'static str, DependencyProperties); 3] {
    [
        (
            LAMBDA_LAUNCHER_DEPENDENCY_NAME,
            DependencyProperties::new(
                LAMBDA_LAUNCHER_DEPENDENCY_VERSION_REQUIREMENTS,
                DependencyType::Hard,
            ),
        ),
        (
            LAMBDA_RUNTIME_DEPENDENCY_NAME,
            DependencyProperties::new(
                LAMBDA_RUNTIME_DEPENDENCY_VERSION_REQUIREMENTS,
                DependencyType::Soft,
            ),
        ),
        (
            LAMBDA_TOKEN_EXCHANGE_SERVICE_DEPENDENCY_NAME,
            DependencyProperties::new(
                LAMBDA_TOKEN_EXCHANGE_SERVICE_VERSION_REQUIREMENTS,
                DependencyType::Hard,
            ),
        ),
    ]
}

/// Caller dependencies plus the injected ones. Injected entries are written
/// last and replace a caller entry of the same name.
pub fn merge_dependencies(
    caller: &BTreeMap<String, DependencyProperties>,
) -> BTreeMap<String, DependencyProperties> {
    let mut merged = caller.clone();
    for (name, properties) in injected_dependencies() {
        merged.insert(name.to_string(), properties);
    }
    merged
}
