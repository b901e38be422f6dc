//! Semantic rules on typed template parameters.

use std::path::{Component, Path};

use tracing::debug;

use lambda_model::constants::{
    FILENAME_MAX, INVALID_VOLUME_DEST_PATHS, INVALID_VOLUME_SOURCE_PATHS,
    LAMBDA_RECIPE_MINIMUM_LAMBDA_MEMORY_IN_KILO_BYTES, LAMBDA_RECIPE_MINIMUM_MAX_IDLE_TIME_IN_SEC,
    LAMBDA_RECIPE_MINIMUM_MAX_INSTANCE_COUNT, LAMBDA_RECIPE_MINIMUM_MAX_QUEUE_SIZE,
    LAMBDA_RECIPE_MINIMUM_STATUS_TIMEOUT_IN_SEC, LAMBDA_RECIPE_MINIMUM_TIMEOUT_IN_SEC, PATH_MAX,
    VALID_PATH_PREFIX_FOR_DEVICES,
};
use lambda_model::{FieldViolation, LambdaTemplateParams, ValidationReport, ViolationKind};

use crate::options::ValidationOptions;

/// Message reported when no target platform is given.
pub const EMPTY_PLATFORMS_MESSAGE: &str = "at least one platform is expected to be set by caller";

/// Apply the semantic rules selected by `options` and collect every violation.
pub fn validate_params(
    params: &LambdaTemplateParams,
    options: &ValidationOptions,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    if params.platforms.is_empty() {
        report.push(FieldViolation::new(
            "platforms",
            ViolationKind::InvalidValue,
            EMPTY_PLATFORMS_MESSAGE,
        ));
    }
    if params.lambda_arn.trim().is_empty() {
        report.push(FieldViolation::new(
            "lambdaArn",
            ViolationKind::Missing,
            "must not be empty",
        ));
    }
    if params.lambda_handler.trim().is_empty() {
        report.push(FieldViolation::new(
            "lambdaHandler",
            ViolationKind::Missing,
            "must not be empty",
        ));
    }

    if options.check_ranges {
        check_ranges(params, &mut report);
    }
    if options.check_mount_paths {
        check_mount_paths(params, &mut report);
    }

    debug!(
        violations = report.len(),
        strict_ranges = options.check_ranges,
        strict_paths = options.check_mount_paths,
        "template parameters checked"
    );
    report
}

fn check_ranges(params: &LambdaTemplateParams, report: &mut ValidationReport) {
    let bounds = [
        (
            "timeoutInSeconds",
            params.timeout_in_seconds,
            LAMBDA_RECIPE_MINIMUM_TIMEOUT_IN_SEC,
        ),
        (
            "statusTimeoutInSeconds",
            params.status_timeout_in_seconds,
            LAMBDA_RECIPE_MINIMUM_STATUS_TIMEOUT_IN_SEC,
        ),
        (
            "maxQueueSize",
            params.max_queue_size,
            LAMBDA_RECIPE_MINIMUM_MAX_QUEUE_SIZE,
        ),
        (
            "maxInstancesCount",
            params.max_instances_count,
            LAMBDA_RECIPE_MINIMUM_MAX_INSTANCE_COUNT,
        ),
        (
            "maxIdleTimeInSeconds",
            params.max_idle_time_in_seconds,
            LAMBDA_RECIPE_MINIMUM_MAX_IDLE_TIME_IN_SEC,
        ),
        (
            "containerParams.memorySize",
            params.container_params.memory_size_in_kb,
            LAMBDA_RECIPE_MINIMUM_LAMBDA_MEMORY_IN_KILO_BYTES,
        ),
    ];

    for (field, value, minimum) in bounds {
        if value < minimum {
            report.push(FieldViolation::new(
                field,
                ViolationKind::OutOfRange,
                format!("must be at least {minimum}, found {value}"),
            ));
        }
    }
}

fn check_mount_paths(params: &LambdaTemplateParams, report: &mut ValidationReport) {
    for (index, device) in params.container_params.devices.iter().enumerate() {
        let field = format!("containerParams.devices[{index}].path");
        if check_path_shape(&field, &device.path, report)
            && !is_within(&device.path, VALID_PATH_PREFIX_FOR_DEVICES)
        {
            report.push(FieldViolation::new(
                field,
                ViolationKind::InvalidValue,
                format!("device paths must be under {VALID_PATH_PREFIX_FOR_DEVICES}"),
            ));
        }
    }

    for (index, volume) in params.container_params.volumes.iter().enumerate() {
        let source_field = format!("containerParams.volumes[{index}].sourcePath");
        if check_path_shape(&source_field, &volume.source_path, report) {
            reject_forbidden(&source_field, &volume.source_path, INVALID_VOLUME_SOURCE_PATHS, report);
        }

        let dest_field = format!("containerParams.volumes[{index}].destinationPath");
        if check_path_shape(&dest_field, &volume.destination_path, report) {
            reject_forbidden(&dest_field, &volume.destination_path, INVALID_VOLUME_DEST_PATHS, report);
        }
    }
}

/// Absolute, within the path length limit, no over-long component.
/// Returns false once a violation has been reported for `path`.
fn check_path_shape(field: &str, path: &str, report: &mut ValidationReport) -> bool {
    if !path.starts_with('/') {
        report.push(FieldViolation::new(
            field,
            ViolationKind::InvalidValue,
            format!("must be an absolute path, found \"{path}\""),
        ));
        return false;
    }
    if path.len() > PATH_MAX {
        report.push(FieldViolation::new(
            field,
            ViolationKind::InvalidValue,
            format!("path is longer than {PATH_MAX} characters"),
        ));
        return false;
    }
    let long_component = Path::new(path).components().any(|component| match component {
        Component::Normal(name) => name.len() > FILENAME_MAX,
        _ => false,
    });
    if long_component {
        report.push(FieldViolation::new(
            field,
            ViolationKind::InvalidValue,
            format!("a path component is longer than {FILENAME_MAX} characters"),
        ));
        return false;
    }
    true
}

fn reject_forbidden(field: &str, path: &str, forbidden: &[&str], report: &mut ValidationReport) {
    if let Some(root) = forbidden.iter().find(|root| is_within(path, root)) {
        report.push(FieldViolation::new(
            field,
            ViolationKind::InvalidValue,
            format!("{root} cannot be mounted"),
        ));
    }
}

/// `path` equals `root` or lies beneath it.
fn is_within(path: &str, root: &str) -> bool {
    Path::new(path).starts_with(root)
}
