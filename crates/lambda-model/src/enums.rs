//! Type-safe enumerations for Lambda template parameters and recipe fields.
//!
//! Every enum here is rendered in documents by a fixed string (for example
//! `python3.7` or `GreengrassContainer`). The string forms live in one
//! lookup per enum (`as_str`) and `FromStr` parses the same strings back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lambda runtime the function is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LambdaRuntime {
    #[serde(rename = "python2.7")]
    Python27,
    #[serde(rename = "python3.7")]
    Python37,
    #[serde(rename = "python3.8")]
    Python38,
    #[serde(rename = "java8")]
    Java8,
    #[serde(rename = "nodejs10.x")]
    Nodejs10X,
    #[serde(rename = "nodejs12.x")]
    Nodejs12X,
}

impl LambdaRuntime {
    /// All runtimes, in the order they are listed to users.
    pub const ALL: [LambdaRuntime; 6] = [
        LambdaRuntime::Python27,
        LambdaRuntime::Python37,
        LambdaRuntime::Python38,
        LambdaRuntime::Java8,
        LambdaRuntime::Nodejs10X,
        LambdaRuntime::Nodejs12X,
    ];

    /// Returns the runtime identifier as it appears in templates (`python3.7`).
    pub fn as_str(&self) -> &'static str {
        match self {
            LambdaRuntime::Python27 => "python2.7",
            LambdaRuntime::Python37 => "python3.7",
            LambdaRuntime::Python38 => "python3.8",
            LambdaRuntime::Java8 => "java8",
            LambdaRuntime::Nodejs10X => "nodejs10.x",
            LambdaRuntime::Nodejs12X => "nodejs12.x",
        }
    }
}

impl fmt::Display for LambdaRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LambdaRuntime {
    type Err = String;

    /// Runtime identifiers are matched exactly; `Python3.7` is not a runtime.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LambdaRuntime::ALL
            .into_iter()
            .find(|runtime| runtime.as_str() == s)
            .ok_or_else(|| format!("Unknown lambda runtime: {s}"))
    }
}

/// Whether the Lambda process runs inside a Greengrass container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LambdaIsolationMode {
    #[default]
    GreengrassContainer,
    NoContainer,
}

impl LambdaIsolationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LambdaIsolationMode::GreengrassContainer => "GreengrassContainer",
            LambdaIsolationMode::NoContainer => "NoContainer",
        }
    }
}

impl fmt::Display for LambdaIsolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LambdaIsolationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GreengrassContainer" => Ok(LambdaIsolationMode::GreengrassContainer),
            "NoContainer" => Ok(LambdaIsolationMode::NoContainer),
            _ => Err(format!("Unknown container mode: {s}")),
        }
    }
}

/// Encoding of the payload handed to the Lambda handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LambdaInputPayloadEncodingType {
    #[default]
    Json,
    Binary,
}

impl LambdaInputPayloadEncodingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LambdaInputPayloadEncodingType::Json => "json",
            LambdaInputPayloadEncodingType::Binary => "binary",
        }
    }
}

impl fmt::Display for LambdaInputPayloadEncodingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Access granted to a mounted volume or device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LambdaFilesystemPermission {
    #[default]
    Ro,
    Rw,
}

/// Where an event source topic lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LambdaEventSourceType {
    /// Local publish/subscribe topic.
    #[default]
    Pubsub,
    /// AWS IoT Core MQTT topic.
    Iotcore,
}

/// Hard dependencies restart the dependent component on change; soft ones do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DependencyType {
    #[default]
    Hard,
    Soft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    #[serde(rename = "aws.greengrass.generic")]
    Generic,
    #[serde(rename = "aws.greengrass.lambda")]
    Lambda,
    #[serde(rename = "aws.greengrass.plugin")]
    Plugin,
    #[serde(rename = "aws.greengrass.nucleus")]
    Nucleus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RecipeFormatVersion {
    #[default]
    #[serde(rename = "2020-01-25")]
    Jan25_2020,
}

/// How the host unpacks an artifact after download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Unarchive {
    #[default]
    None,
    Zip,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_from_str() {
        assert_eq!(
            "python3.7".parse::<LambdaRuntime>().unwrap(),
            LambdaRuntime::Python37
        );
        assert_eq!(
            "nodejs12.x".parse::<LambdaRuntime>().unwrap(),
            LambdaRuntime::Nodejs12X
        );
        assert!("fortran".parse::<LambdaRuntime>().is_err());
        assert!("Python3.7".parse::<LambdaRuntime>().is_err());
    }

    #[test]
    fn test_runtime_display_matches_serde() {
        for runtime in LambdaRuntime::ALL {
            let json = serde_json::to_string(&runtime).unwrap();
            assert_eq!(json, format!("\"{runtime}\""));
        }
    }

    #[test]
    fn test_container_mode_from_str() {
        assert_eq!(
            "NoContainer".parse::<LambdaIsolationMode>().unwrap(),
            LambdaIsolationMode::NoContainer
        );
        assert!("nocontainer".parse::<LambdaIsolationMode>().is_err());
    }

    #[test]
    fn test_recipe_enum_strings() {
        assert_eq!(
            serde_json::to_string(&ComponentType::Lambda).unwrap(),
            "\"aws.greengrass.lambda\""
        );
        assert_eq!(
            serde_json::to_string(&RecipeFormatVersion::Jan25_2020).unwrap(),
            "\"2020-01-25\""
        );
        assert_eq!(serde_json::to_string(&Unarchive::Zip).unwrap(), "\"ZIP\"");
        assert_eq!(serde_json::to_string(&DependencyType::Soft).unwrap(), "\"SOFT\"");
    }
}
