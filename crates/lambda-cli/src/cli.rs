//! CLI argument definitions for the recipe generator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use lambda_validate::ValidationOptions;

#[derive(Parser)]
#[command(
    name = "lambda-recipe",
    version,
    about = "Generate Greengrass component recipes for Lambda functions",
    long_about = "Expand Lambda template parameters into a Greengrass component recipe.\n\n\
                  Parameter files carry ComponentName, ComponentVersion, an optional\n\
                  ComponentDescription and TemplateParameters, in JSON or TOML."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a component recipe from a parameter file.
    Transform(TransformArgs),

    /// Check a parameter file and list every problem found.
    Validate(ValidateArgs),

    /// Print the template parameter schema with its defaults.
    Schema(SchemaArgs),

    /// List supported Lambda runtimes and their launch arguments.
    Runtimes,
}

#[derive(Parser)]
pub struct TransformArgs {
    /// Parameter file (JSON, or TOML with a .toml extension).
    #[arg(value_name = "PARAM_FILE")]
    pub input: PathBuf,

    /// Write the recipe here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Parameter file format (default: from the file extension).
    #[arg(long = "input-format", value_enum)]
    pub input_format: Option<InputFormatArg>,

    #[command(flatten)]
    pub rules: RuleArgs,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Parameter file (JSON, or TOML with a .toml extension).
    #[arg(value_name = "PARAM_FILE")]
    pub input: PathBuf,

    /// Parameter file format (default: from the file extension).
    #[arg(long = "input-format", value_enum)]
    pub input_format: Option<InputFormatArg>,

    #[command(flatten)]
    pub rules: RuleArgs,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Write the schema here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Optional validation rules.
#[derive(Args)]
pub struct RuleArgs {
    /// Enable every optional rule (ranges and mount paths).
    ///
    /// Use this for recipes that will be uploaded to the cloud component
    /// service, which enforces the same limits.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Enforce minimum timeouts, queue size, instance count and memory.
    #[arg(long = "check-ranges")]
    pub check_ranges: bool,

    /// Enforce device and volume mount path rules.
    #[arg(long = "check-mount-paths")]
    pub check_mount_paths: bool,
}

impl RuleArgs {
    pub fn validation_options(&self) -> ValidationOptions {
        if self.strict {
            ValidationOptions::strict()
        } else {
            ValidationOptions::new()
                .with_ranges(self.check_ranges)
                .with_mount_paths(self.check_mount_paths)
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InputFormatArg {
    Json,
    Toml,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
