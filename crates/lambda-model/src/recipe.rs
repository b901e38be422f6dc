//! Component recipe documents consumed by the host's component store.
//!
//! Keys are serialized in the recipe's PascalCase form (`ComponentName`,
//! `Manifests`, ...). Lifecycle stage names stay lowercase.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::{ComponentType, RecipeFormatVersion, Unarchive};
use crate::params::DependencyProperties;
use crate::platform::Platform;

/// The partial recipe a caller supplies: identity plus raw template parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipeEnvelope {
    pub component_name: String,
    pub component_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_description: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub template_parameters: Map<String, Value>,
}

impl RecipeEnvelope {
    pub fn new(component_name: impl Into<String>, component_version: impl Into<String>) -> Self {
        Self {
            component_name: component_name.into(),
            component_version: component_version.into(),
            component_description: None,
            template_parameters: Map::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.component_description = Some(description.into());
        self
    }

    pub fn with_template_parameters(mut self, parameters: Map<String, Value>) -> Self {
        self.template_parameters = parameters;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComponentArtifact {
    #[serde(rename = "URI")]
    pub uri: String,
    #[serde(default)]
    pub unarchive: Unarchive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlatformSpecificManifest {
    pub platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub artifacts: Vec<ComponentArtifact>,
    /// Lambda recipes carry one top-level lifecycle, so this stays empty.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub lifecycle: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComponentConfiguration {
    pub default_configuration: Value,
}

/// A privileged or unprivileged script run at one lifecycle stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleStep {
    pub requires_privilege: bool,
    pub script: String,
}

/// Lifecycle of a Lambda component: environment, launcher start and stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifecycle {
    pub setenv: BTreeMap<String, String>,
    pub startup: LifecycleStep,
    pub shutdown: LifecycleStep,
}

impl Lifecycle {
    /// Stage names in document order.
    pub const STAGES: [&'static str; 3] = ["setenv", "startup", "shutdown"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComponentRecipe {
    pub recipe_format_version: RecipeFormatVersion,
    pub component_name: String,
    pub component_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_description: Option<String>,
    pub component_publisher: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_source: Option<String>,
    pub component_type: ComponentType,
    pub component_dependencies: BTreeMap<String, DependencyProperties>,
    pub component_configuration: ComponentConfiguration,
    pub manifests: Vec<PlatformSpecificManifest>,
    pub lifecycle: Lifecycle,
}
