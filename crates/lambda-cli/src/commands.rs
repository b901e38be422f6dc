use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use serde::Serialize;
use tracing::{info, info_span, warn};

use lambda_cli::check::{check_envelope, runtime_rows};
use lambda_cli::input::{InputFormat, load_envelope};
use lambda_transform::{LambdaTransformer, RecipeTransformer};

use crate::cli::{InputFormatArg, SchemaArgs, TransformArgs, ValidateArgs};
use crate::summary::apply_table_style;
use crate::types::ValidateOutcome;

pub fn run_transform(args: &TransformArgs) -> Result<()> {
    let envelope = load_envelope(&args.input, args.input_format.map(input_format))?;
    let transform_span = info_span!(
        "transform_file",
        input = %args.input.display(),
        component = %envelope.component_name
    );
    let _transform_guard = transform_span.enter();

    let transformer = LambdaTransformer::new().with_options(args.rules.validation_options());
    let recipe = transformer
        .transform_envelope(&envelope)
        .with_context(|| format!("transform {}", args.input.display()))?;

    write_json(&recipe, args.output.as_deref())?;
    if let Some(path) = &args.output {
        info!(output = %path.display(), "recipe written");
    }
    Ok(())
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateOutcome> {
    let envelope = load_envelope(&args.input, args.input_format.map(input_format))?;
    let report = check_envelope(&envelope, args.rules.validation_options())
        .with_context(|| format!("validate {}", args.input.display()))?;
    if !report.is_empty() {
        warn!(
            input = %args.input.display(),
            violations = report.len(),
            "parameter file rejected"
        );
    }

    Ok(ValidateOutcome {
        input: args.input.clone(),
        component_name: envelope.component_name,
        component_version: envelope.component_version,
        report,
    })
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let schema = LambdaTransformer::new()
        .template_schema()
        .context("build template schema")?;
    write_json(&schema, args.output.as_deref())
}

pub fn run_runtimes() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Runtime", "Launch arguments"]);
    apply_table_style(&mut table);
    for (runtime, launch_args) in runtime_rows() {
        table.add_row(vec![runtime, launch_args]);
    }
    println!("{table}");
    Ok(())
}

fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("encode JSON output")?;
    match output {
        Some(path) => fs::write(path, format!("{text}\n"))
            .with_context(|| format!("write {}", path.display())),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

fn input_format(arg: InputFormatArg) -> InputFormat {
    match arg {
        InputFormatArg::Json => InputFormat::Json,
        InputFormatArg::Toml => InputFormat::Toml,
    }
}
