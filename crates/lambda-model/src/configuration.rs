//! Default configuration block written into generated recipes.
//!
//! The host's configuration model stores keyed objects only, so the mount and
//! topic lists of the template appear here as maps keyed by list index.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{LambdaInputPayloadEncodingType, LambdaIsolationMode};
use crate::params::{LambdaDeviceMount, LambdaEventSource, LambdaVolumeMount};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LambdaExecutionParameters {
    #[serde(rename = "EnvironmentVariables")]
    pub environment_variables: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerParams {
    #[serde(rename = "memorySize")]
    pub memory_size_in_kb: u32,
    #[serde(rename = "mountROSysfs")]
    pub mount_ro_sysfs: bool,
    pub volumes: BTreeMap<String, LambdaVolumeMount>,
    pub devices: BTreeMap<String, LambdaDeviceMount>,
}

/// Configuration the Lambda launcher reads at runtime through the
/// `{configuration:/...}` interpolation tokens of the lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultConfiguration {
    pub lambda_execution_parameters: LambdaExecutionParameters,
    pub container_params: ContainerParams,
    pub container_mode: LambdaIsolationMode,
    pub timeout_in_seconds: u32,
    pub max_instances_count: u32,
    pub input_payload_encoding_type: LambdaInputPayloadEncodingType,
    pub max_queue_size: u32,
    pub pinned: bool,
    pub max_idle_time_in_seconds: u32,
    pub status_timeout_in_seconds: u32,
    pub pubsub_topics: BTreeMap<String, LambdaEventSource>,
}
