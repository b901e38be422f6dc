//! Reading parameter files.
//!
//! A parameter file is a recipe envelope: `ComponentName`,
//! `ComponentVersion`, an optional `ComponentDescription` and the
//! `TemplateParameters` table. JSON and TOML are accepted.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};

use lambda_model::RecipeEnvelope;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Json,
    Toml,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Json => "json",
            InputFormat::Toml => "toml",
        }
    }

    /// Format implied by the file extension. Anything other than `.toml` is
    /// read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => InputFormat::Toml,
            _ => InputFormat::Json,
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "toml" => Ok(InputFormat::Toml),
            _ => Err(format!("Unknown input format: {s}")),
        }
    }
}

/// Parse envelope text in the given format.
pub fn parse_envelope(text: &str, format: InputFormat) -> Result<RecipeEnvelope> {
    match format {
        InputFormat::Json => serde_json::from_str(text).context("parse JSON parameter file"),
        InputFormat::Toml => toml::from_str(text).context("parse TOML parameter file"),
    }
}

/// Read and parse a parameter file. `format` overrides the extension.
pub fn load_envelope(path: &Path, format: Option<InputFormat>) -> Result<RecipeEnvelope> {
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_envelope(&text, format).with_context(|| format!("load {}", path.display()))
}
