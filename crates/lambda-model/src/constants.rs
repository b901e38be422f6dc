//! Fixed names, defaults and limits shared by the template model and the
//! recipe generator.

/// Publisher stamped on every generated Lambda recipe.
pub const AWS_LAMBDA_PUBLISHER: &str = "AWS Lambda";

// Runtime entry points, relative to the runtimes component artifact.
pub const PYTHON_LAMBDA_RUNTIME_COMMAND: &str = "/runtime/python/lambda_runtime.py";
pub const JAVA_LAMBDA_RUNTIME_COMMAND: &str = "com.amazonaws.greengrass.runtime.LambdaRuntime";
pub const NODEJS_LAMBDA_RUNTIME_COMMAND: &str = "/runtime/nodejs/lambda_nodejs_runtime.js";
pub const LAMBDA_EXEC_ARGS_HANDLER: &str = "--handler=";

// Environment variables exported in the `setenv` lifecycle stage.
pub const LAMBDA_SETENV_CONTAINER_MODE_PARAM_NAME: &str = "AWS_GREENGRASS_LAMBDA_CONTAINER_MODE";
pub const LAMBDA_SETENV_ARN_PARAM_NAME: &str = "AWS_GREENGRASS_LAMBDA_ARN";
pub const LAMBDA_SETENV_HANDLER_PARAM_NAME: &str = "AWS_GREENGRASS_LAMBDA_FUNCTION_HANDLER";
pub const LAMBDA_SETENV_ARTIFACT_PATH_PARAM_NAME: &str = "AWS_GREENGRASS_LAMBDA_ARTIFACT_PATH";
pub const LAMBDA_SETENV_LAMBDA_PARAMS_PARAM_NAME: &str = "AWS_GREENGRASS_LAMBDA_PARAMS";
pub const LAMBDA_SETENV_LAMBDA_RUNTIME_PATH_PARAM_NAME: &str = "AWS_GREENGRASS_LAMBDA_RUNTIME_PATH";
pub const LAMBDA_SETENV_LAMBDA_RUNTIME_PARAM_NAME: &str = "AWS_GREENGRASS_LAMBDA_RUNTIME";
pub const LAMBDA_SETENV_CONTAINER_PARAMS_PARAM_NAME: &str = "AWS_GREENGRASS_LAMBDA_CONTAINER_PARAMS";
pub const LAMBDA_SETENV_ENCODING_TYPE_PARAM_NAME: &str = "AWS_GREENGRASS_LAMBDA_ENCODING_TYPE";
pub const LAMBDA_SETENV_STATUS_TIMEOUT_PARAM_NAME: &str =
    "AWS_GREENGRASS_LAMBDA_STATUS_TIMEOUT_SECONDS";
pub const LAMBDA_SETENV_EXEC_ARGS_PARAM_NAME: &str = "AWS_GREENGRASS_LAMBDA_EXEC_ARGS";

// Injected component dependencies.
pub const LAMBDA_LAUNCHER_DEPENDENCY_NAME: &str = "aws.greengrass.LambdaLauncher";
pub const LAMBDA_RUNTIME_DEPENDENCY_NAME: &str = "aws.greengrass.LambdaRuntimes";
pub const LAMBDA_TOKEN_EXCHANGE_SERVICE_DEPENDENCY_NAME: &str = "aws.greengrass.TokenExchangeService";
pub const LAMBDA_LAUNCHER_DEPENDENCY_VERSION_REQUIREMENTS: &str = "^2.0.0";
pub const LAMBDA_RUNTIME_DEPENDENCY_VERSION_REQUIREMENTS: &str = "^2.0.0";
pub const LAMBDA_TOKEN_EXCHANGE_SERVICE_VERSION_REQUIREMENTS: &str = "^2.0.0";

// Template parameter defaults.
pub const LAMBDA_RECIPE_DEFAULT_MAX_IDLE_TIME_IN_SEC: u32 = 60;
pub const LAMBDA_RECIPE_DEFAULT_TIMEOUT_IN_SEC: u32 = 3;
pub const LAMBDA_RECIPE_DEFAULT_STATUS_TIMEOUT_IN_SEC: u32 = 60;
pub const LAMBDA_RECIPE_DEFAULT_MAX_QUEUE_SIZE: u32 = 1000;
pub const LAMBDA_RECIPE_DEFAULT_MAX_INSTANCE_COUNT: u32 = 100;
pub const LAMBDA_RECIPE_DEFAULT_LAMBDA_MEMORY_IN_KILO_BYTES: u32 = 16_000;
pub const LAMBDA_RECIPE_DEFAULT_PINNED: bool = true;
pub const LAMBDA_RECIPE_DEFAULT_MOUNT_RO_SYSFS: bool = false;
pub const DEFAULT_ADD_GROUP_OWNER: bool = false;

// Lower bounds enforced by strict validation.
pub const LAMBDA_RECIPE_MINIMUM_MAX_IDLE_TIME_IN_SEC: u32 = 30;
pub const LAMBDA_RECIPE_MINIMUM_TIMEOUT_IN_SEC: u32 = 1;
pub const LAMBDA_RECIPE_MINIMUM_STATUS_TIMEOUT_IN_SEC: u32 = 30;
pub const LAMBDA_RECIPE_MINIMUM_MAX_QUEUE_SIZE: u32 = 1;
pub const LAMBDA_RECIPE_MINIMUM_MAX_INSTANCE_COUNT: u32 = 1;
pub const LAMBDA_RECIPE_MINIMUM_LAMBDA_MEMORY_IN_KILO_BYTES: u32 = 2048;

// Mount path rules enforced by strict validation.
pub const VALID_PATH_PREFIX_FOR_DEVICES: &str = "/dev";
/// Most Linux file systems cap a full path at 4096 characters.
pub const PATH_MAX: usize = 4096;
/// Most Linux file systems cap a single file name at 255 characters.
pub const FILENAME_MAX: usize = 255;
pub const INVALID_VOLUME_SOURCE_PATHS: &[&str] = &["/sys"];
pub const INVALID_VOLUME_DEST_PATHS: &[&str] = &["/proc"];

// The single artifact every manifest points at.
pub const GREENGRASS_ARTIFACT_PREFIX: &str = "greengrass:";
pub const LAMBDA_ARTIFACT_NAME: &str = "lambda-artifact";
pub const LAMBDA_ARTIFACT_EXTENSION: &str = ".zip";
pub const LAMBDA_COMPLETE_ARTIFACT_URI: &str = "greengrass:lambda-artifact.zip";
