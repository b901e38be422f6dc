//! Default configuration derived from the template parameters.

use lambda_model::{
    ComponentConfiguration, ContainerParams, DefaultConfiguration, LambdaExecutionParameters,
    LambdaTemplateParams, Result,
};

use crate::keyed::index_keyed;

/// Copy the optional parameters into the configuration layout the launcher
/// reads. Lists become index-keyed maps.
pub fn default_configuration(params: &LambdaTemplateParams) -> DefaultConfiguration {
    let container = &params.container_params;
    DefaultConfiguration {
        lambda_execution_parameters: LambdaExecutionParameters {
            environment_variables: params.environment_variables.clone(),
        },
        container_params: ContainerParams {
            memory_size_in_kb: container.memory_size_in_kb,
            mount_ro_sysfs: container.mount_ro_sysfs,
            volumes: index_keyed(&container.volumes),
            devices: index_keyed(&container.devices),
        },
        container_mode: params.container_mode,
        timeout_in_seconds: params.timeout_in_seconds,
        max_instances_count: params.max_instances_count,
        input_payload_encoding_type: params.input_payload_encoding_type,
        max_queue_size: params.max_queue_size,
        pinned: params.pinned,
        max_idle_time_in_seconds: params.max_idle_time_in_seconds,
        status_timeout_in_seconds: params.status_timeout_in_seconds,
        pubsub_topics: index_keyed(&params.event_sources),
    }
}

/// The `ComponentConfiguration` block, with the defaults as a JSON document.
pub fn component_configuration(params: &LambdaTemplateParams) -> Result<ComponentConfiguration> {
    Ok(ComponentConfiguration {
        default_configuration: serde_json::to_value(default_configuration(params))?,
    })
}
