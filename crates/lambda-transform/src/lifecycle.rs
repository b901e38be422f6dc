//! The single lifecycle block shared by every manifest.

use std::collections::BTreeMap;

use lambda_model::constants::{
    LAMBDA_ARTIFACT_NAME, LAMBDA_LAUNCHER_DEPENDENCY_NAME, LAMBDA_RUNTIME_DEPENDENCY_NAME,
    LAMBDA_SETENV_ARN_PARAM_NAME, LAMBDA_SETENV_ARTIFACT_PATH_PARAM_NAME,
    LAMBDA_SETENV_CONTAINER_MODE_PARAM_NAME, LAMBDA_SETENV_CONTAINER_PARAMS_PARAM_NAME,
    LAMBDA_SETENV_ENCODING_TYPE_PARAM_NAME, LAMBDA_SETENV_EXEC_ARGS_PARAM_NAME,
    LAMBDA_SETENV_HANDLER_PARAM_NAME, LAMBDA_SETENV_LAMBDA_PARAMS_PARAM_NAME,
    LAMBDA_SETENV_LAMBDA_RUNTIME_PARAM_NAME, LAMBDA_SETENV_LAMBDA_RUNTIME_PATH_PARAM_NAME,
    LAMBDA_SETENV_STATUS_TIMEOUT_PARAM_NAME,
};
use lambda_model::{LambdaTemplateParams, Lifecycle, LifecycleStep, Result};

/// Interpolation token resolved by the host against the component's
/// default configuration.
fn configuration_token(key: &str) -> String {
    format!("{{configuration:/{key}}}")
}

fn launcher_command(action: &str) -> String {
    format!("{{{LAMBDA_LAUNCHER_DEPENDENCY_NAME}:artifacts:path}}/lambda-launcher {action}")
}

/// Environment exported to the launcher.
///
/// `exec_args` is the full argument list (runtime template plus caller
/// arguments); it is embedded as a compact JSON array.
pub fn setenv(
    params: &LambdaTemplateParams,
    exec_args: &[String],
) -> Result<BTreeMap<String, String>> {
    let entries = [
        (
            LAMBDA_SETENV_CONTAINER_MODE_PARAM_NAME,
            configuration_token("containerMode"),
        ),
        (LAMBDA_SETENV_ARN_PARAM_NAME, params.lambda_arn.clone()),
        (
            LAMBDA_SETENV_HANDLER_PARAM_NAME,
            params.lambda_handler.clone(),
        ),
        (
            LAMBDA_SETENV_ARTIFACT_PATH_PARAM_NAME,
            format!("{{artifacts:decompressedPath}}/{LAMBDA_ARTIFACT_NAME}"),
        ),
        (
            LAMBDA_SETENV_LAMBDA_PARAMS_PARAM_NAME,
            configuration_token("lambdaExecutionParameters"),
        ),
        (
            LAMBDA_SETENV_LAMBDA_RUNTIME_PATH_PARAM_NAME,
            format!("{{{LAMBDA_RUNTIME_DEPENDENCY_NAME}:artifacts:decompressedPath}}/runtime/"),
        ),
        (
            LAMBDA_SETENV_LAMBDA_RUNTIME_PARAM_NAME,
            params.lambda_runtime.as_str().to_string(),
        ),
        (
            LAMBDA_SETENV_CONTAINER_PARAMS_PARAM_NAME,
            configuration_token("containerParams"),
        ),
        (
            LAMBDA_SETENV_ENCODING_TYPE_PARAM_NAME,
            configuration_token("inputPayloadEncodingType"),
        ),
        (
            LAMBDA_SETENV_STATUS_TIMEOUT_PARAM_NAME,
            configuration_token("statusTimeoutInSeconds"),
        ),
        (
            LAMBDA_SETENV_EXEC_ARGS_PARAM_NAME,
            serde_json::to_string(exec_args)?,
        ),
    ];

    Ok(entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect())
}

pub fn build_lifecycle(params: &LambdaTemplateParams, exec_args: &[String]) -> Result<Lifecycle> {
    Ok(Lifecycle {
        setenv: setenv(params, exec_args)?,
        startup: LifecycleStep {
            requires_privilege: true,
            script: launcher_command("start"),
        },
        shutdown: LifecycleStep {
            requires_privilege: true,
            script: format!(
                "{}; {}",
                launcher_command("stop"),
                launcher_command("clean")
            ),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_model::LambdaRuntime;

    fn params() -> LambdaTemplateParams {
        LambdaTemplateParams::new(
            "arn:aws:lambda:us-west-2:111111111111:function:fn1",
            LambdaRuntime::Python37,
            "h.handler",
        )
    }

    #[test]
    fn setenv_has_every_launcher_key() {
        let env = setenv(&params(), &["python3.7".to_string()]).unwrap();
        assert_eq!(env.len(), 11);
        assert_eq!(
            env[LAMBDA_SETENV_CONTAINER_MODE_PARAM_NAME],
            "{configuration:/containerMode}"
        );
        assert_eq!(
            env[LAMBDA_SETENV_ARTIFACT_PATH_PARAM_NAME],
            "{artifacts:decompressedPath}/lambda-artifact"
        );
        assert_eq!(
            env[LAMBDA_SETENV_LAMBDA_RUNTIME_PATH_PARAM_NAME],
            "{aws.greengrass.LambdaRuntimes:artifacts:decompressedPath}/runtime/"
        );
        assert_eq!(env[LAMBDA_SETENV_LAMBDA_RUNTIME_PARAM_NAME], "python3.7");
        assert_eq!(env[LAMBDA_SETENV_EXEC_ARGS_PARAM_NAME], r#"["python3.7"]"#);
    }

    #[test]
    fn launcher_scripts_are_privileged() {
        let lifecycle = build_lifecycle(&params(), &[]).unwrap();
        assert!(lifecycle.startup.requires_privilege);
        assert!(lifecycle.shutdown.requires_privilege);
        assert_eq!(
            lifecycle.startup.script,
            "{aws.greengrass.LambdaLauncher:artifacts:path}/lambda-launcher start"
        );
        assert_eq!(
            lifecycle.shutdown.script,
            "{aws.greengrass.LambdaLauncher:artifacts:path}/lambda-launcher stop; \
             {aws.greengrass.LambdaLauncher:artifacts:path}/lambda-launcher clean"
        );
    }
}
