//! Template parameters: the minimal Lambda description a user writes.
//!
//! Only `lambdaArn`, `lambdaRuntime` and `lambdaHandler` are required. Every
//! other field falls back to a fixed default, both when a document omits it
//! and when the struct is built with [`LambdaTemplateParams::new`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ADD_GROUP_OWNER, LAMBDA_RECIPE_DEFAULT_LAMBDA_MEMORY_IN_KILO_BYTES,
    LAMBDA_RECIPE_DEFAULT_MAX_IDLE_TIME_IN_SEC, LAMBDA_RECIPE_DEFAULT_MAX_INSTANCE_COUNT,
    LAMBDA_RECIPE_DEFAULT_MAX_QUEUE_SIZE, LAMBDA_RECIPE_DEFAULT_MOUNT_RO_SYSFS,
    LAMBDA_RECIPE_DEFAULT_PINNED, LAMBDA_RECIPE_DEFAULT_STATUS_TIMEOUT_IN_SEC,
    LAMBDA_RECIPE_DEFAULT_TIMEOUT_IN_SEC,
};
use crate::enums::{
    DependencyType, LambdaEventSourceType, LambdaFilesystemPermission, LambdaInputPayloadEncodingType,
    LambdaIsolationMode, LambdaRuntime,
};
use crate::platform::Platform;

/// Version range and strength of a component dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DependencyProperties {
    pub version_requirement: String,
    #[serde(default)]
    pub dependency_type: DependencyType,
}

impl DependencyProperties {
    pub fn new(version_requirement: impl Into<String>, dependency_type: DependencyType) -> Self {
        Self {
            version_requirement: version_requirement.into(),
            dependency_type,
        }
    }
}

/// A topic the Lambda subscribes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LambdaEventSource {
    pub topic: String,
    #[serde(rename = "type", default)]
    pub source_type: LambdaEventSourceType,
}

impl LambdaEventSource {
    pub fn pubsub(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            source_type: LambdaEventSourceType::Pubsub,
        }
    }

    pub fn iotcore(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            source_type: LambdaEventSourceType::Iotcore,
        }
    }
}

/// A host directory mounted into the Lambda container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LambdaVolumeMount {
    pub source_path: String,
    pub destination_path: String,
    #[serde(default)]
    pub permission: LambdaFilesystemPermission,
    #[serde(default = "default_add_group_owner")]
    pub add_group_owner: bool,
}

impl LambdaVolumeMount {
    pub fn new(source_path: impl Into<String>, destination_path: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            destination_path: destination_path.into(),
            permission: LambdaFilesystemPermission::default(),
            add_group_owner: DEFAULT_ADD_GROUP_OWNER,
        }
    }
}

/// A host device exposed to the Lambda container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LambdaDeviceMount {
    pub path: String,
    #[serde(default)]
    pub permission: LambdaFilesystemPermission,
    #[serde(default = "default_add_group_owner")]
    pub add_group_owner: bool,
}

impl LambdaDeviceMount {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            permission: LambdaFilesystemPermission::default(),
            add_group_owner: DEFAULT_ADD_GROUP_OWNER,
        }
    }
}

/// Container settings as written in a template: mounts are plain lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateContainerParams {
    #[serde(rename = "memorySize", alias = "memorySizeInKB")]
    pub memory_size_in_kb: u32,
    #[serde(rename = "mountROSysfs")]
    pub mount_ro_sysfs: bool,
    pub volumes: Vec<LambdaVolumeMount>,
    pub devices: Vec<LambdaDeviceMount>,
}

impl Default for TemplateContainerParams {
    fn default() -> Self {
        Self {
            memory_size_in_kb: LAMBDA_RECIPE_DEFAULT_LAMBDA_MEMORY_IN_KILO_BYTES,
            mount_ro_sysfs: LAMBDA_RECIPE_DEFAULT_MOUNT_RO_SYSFS,
            volumes: Vec::new(),
            devices: Vec::new(),
        }
    }
}

/// Parameters of the Lambda template.
///
/// Field names follow the template document keys; three keys differ from the
/// Rust field names: `pubsubTopics` (event sources), `lambdaArgs` (extra exec
/// arguments) and `lambdaEnvironmentVariables`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LambdaTemplateParams {
    pub lambda_arn: String,
    pub lambda_runtime: LambdaRuntime,
    pub lambda_handler: String,

    #[serde(rename = "pubsubTopics", default)]
    pub event_sources: Vec<LambdaEventSource>,

    #[serde(default = "default_timeout_in_seconds")]
    pub timeout_in_seconds: u32,

    #[serde(default = "default_pinned")]
    pub pinned: bool,

    #[serde(default = "default_status_timeout_in_seconds")]
    pub status_timeout_in_seconds: u32,

    #[serde(default = "default_max_queue_size")]
    pub max_queue_size: u32,

    #[serde(default = "default_max_instances_count")]
    pub max_instances_count: u32,

    #[serde(default = "default_max_idle_time_in_seconds")]
    pub max_idle_time_in_seconds: u32,

    #[serde(default)]
    pub input_payload_encoding_type: LambdaInputPayloadEncodingType,

    #[serde(default = "default_platforms")]
    pub platforms: Vec<Platform>,

    #[serde(default)]
    pub component_dependencies: BTreeMap<String, DependencyProperties>,

    #[serde(rename = "lambdaArgs", default)]
    pub exec_args: Vec<String>,

    #[serde(rename = "lambdaEnvironmentVariables", default)]
    pub environment_variables: BTreeMap<String, String>,

    #[serde(default)]
    pub container_mode: LambdaIsolationMode,

    #[serde(default)]
    pub container_params: TemplateContainerParams,
}

impl LambdaTemplateParams {
    /// Parameters with the required fields set and every optional field at its default.
    pub fn new(
        lambda_arn: impl Into<String>,
        lambda_runtime: LambdaRuntime,
        lambda_handler: impl Into<String>,
    ) -> Self {
        Self {
            lambda_arn: lambda_arn.into(),
            lambda_runtime,
            lambda_handler: lambda_handler.into(),
            event_sources: Vec::new(),
            timeout_in_seconds: default_timeout_in_seconds(),
            pinned: default_pinned(),
            status_timeout_in_seconds: default_status_timeout_in_seconds(),
            max_queue_size: default_max_queue_size(),
            max_instances_count: default_max_instances_count(),
            max_idle_time_in_seconds: default_max_idle_time_in_seconds(),
            input_payload_encoding_type: LambdaInputPayloadEncodingType::default(),
            platforms: default_platforms(),
            component_dependencies: BTreeMap::new(),
            exec_args: Vec::new(),
            environment_variables: BTreeMap::new(),
            container_mode: LambdaIsolationMode::default(),
            container_params: TemplateContainerParams::default(),
        }
    }

    pub fn with_platforms(mut self, platforms: Vec<Platform>) -> Self {
        self.platforms = platforms;
        self
    }

    pub fn with_dependency(
        mut self,
        name: impl Into<String>,
        properties: DependencyProperties,
    ) -> Self {
        self.component_dependencies.insert(name.into(), properties);
        self
    }

    pub fn with_event_source(mut self, source: LambdaEventSource) -> Self {
        self.event_sources.push(source);
        self
    }

    pub fn with_exec_args(mut self, args: Vec<String>) -> Self {
        self.exec_args = args;
        self
    }

    pub fn with_environment_variable(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.environment_variables.insert(name.into(), value.into());
        self
    }

    pub fn with_container_mode(mut self, mode: LambdaIsolationMode) -> Self {
        self.container_mode = mode;
        self
    }

    pub fn with_container_params(mut self, params: TemplateContainerParams) -> Self {
        self.container_params = params;
        self
    }
}

fn default_timeout_in_seconds() -> u32 {
    LAMBDA_RECIPE_DEFAULT_TIMEOUT_IN_SEC
}

fn default_pinned() -> bool {
    LAMBDA_RECIPE_DEFAULT_PINNED
}

fn default_status_timeout_in_seconds() -> u32 {
    LAMBDA_RECIPE_DEFAULT_STATUS_TIMEOUT_IN_SEC
}

fn default_max_queue_size() -> u32 {
    LAMBDA_RECIPE_DEFAULT_MAX_QUEUE_SIZE
}

fn default_max_instances_count() -> u32 {
    LAMBDA_RECIPE_DEFAULT_MAX_INSTANCE_COUNT
}

fn default_max_idle_time_in_seconds() -> u32 {
    LAMBDA_RECIPE_DEFAULT_MAX_IDLE_TIME_IN_SEC
}

fn default_platforms() -> Vec<Platform> {
    vec![Platform::all()]
}

fn default_add_group_owner() -> bool {
    DEFAULT_ADD_GROUP_OWNER
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn omitted_fields_take_defaults() {
        let params: LambdaTemplateParams = serde_json::from_value(json!({
            "lambdaArn": "arn:aws:lambda:us-west-2:111111111111:function:fn1",
            "lambdaRuntime": "python3.7",
            "lambdaHandler": "h.handler",
        }))
        .unwrap();

        assert_eq!(
            params,
            LambdaTemplateParams::new(
                "arn:aws:lambda:us-west-2:111111111111:function:fn1",
                LambdaRuntime::Python37,
                "h.handler"
            )
        );
        assert_eq!(params.platforms, vec![Platform::all()]);
        assert_eq!(params.container_params.memory_size_in_kb, 16_000);
        assert!(!params.container_params.mount_ro_sysfs);
    }

    #[test]
    fn renamed_keys_are_read() {
        let params: LambdaTemplateParams = serde_json::from_value(json!({
            "lambdaArn": "arn",
            "lambdaRuntime": "java8",
            "lambdaHandler": "Handler::handle",
            "pubsubTopics": [{"topic": "sensors/#", "type": "iotcore"}],
            "lambdaArgs": ["-v"],
            "lambdaEnvironmentVariables": {"LEVEL": "debug"},
            "containerParams": {"memorySizeInKB": 4096, "devices": [{"path": "/dev/ttyS0"}]},
        }))
        .unwrap();

        assert_eq!(params.event_sources, vec![LambdaEventSource::iotcore("sensors/#")]);
        assert_eq!(params.exec_args, vec!["-v".to_string()]);
        assert_eq!(params.environment_variables["LEVEL"], "debug");
        assert_eq!(params.container_params.memory_size_in_kb, 4096);
        assert_eq!(
            params.container_params.devices,
            vec![LambdaDeviceMount::new("/dev/ttyS0")]
        );
    }

    #[test]
    fn unknown_runtime_is_rejected() {
        let result = serde_json::from_value::<LambdaTemplateParams>(json!({
            "lambdaArn": "arn",
            "lambdaRuntime": "fortran",
            "lambdaHandler": "main",
        }));
        assert!(result.is_err());
    }
}
