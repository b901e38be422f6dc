//! Target platform descriptors used to select recipe manifests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating system a manifest applies to. `*` matches any OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlatformOs {
    #[serde(rename = "*")]
    All,
    #[serde(rename = "windows")]
    Windows,
    #[serde(rename = "linux")]
    Linux,
    #[serde(rename = "darwin")]
    Darwin,
    #[serde(rename = "macos")]
    Macos,
    #[serde(rename = "unix")]
    Unix,
}

impl PlatformOs {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformOs::All => "*",
            PlatformOs::Windows => "windows",
            PlatformOs::Linux => "linux",
            PlatformOs::Darwin => "darwin",
            PlatformOs::Macos => "macos",
            PlatformOs::Unix => "unix",
        }
    }
}

/// CPU architecture a manifest applies to. `*` matches any architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlatformArchitecture {
    #[serde(rename = "*")]
    All,
    #[serde(rename = "amd64")]
    Amd64,
    #[serde(rename = "arm")]
    Arm,
    #[serde(rename = "aarch64")]
    Aarch64,
    #[serde(rename = "x86")]
    X86,
}

impl PlatformArchitecture {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformArchitecture::All => "*",
            PlatformArchitecture::Amd64 => "amd64",
            PlatformArchitecture::Arm => "arm",
            PlatformArchitecture::Aarch64 => "aarch64",
            PlatformArchitecture::X86 => "x86",
        }
    }
}

/// A platform constraint. Unset attributes are left out of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Platform {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<PlatformOs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<PlatformArchitecture>,
}

impl Platform {
    /// Platform matching every OS, the template default.
    pub fn all() -> Self {
        Self {
            os: Some(PlatformOs::All),
            architecture: None,
        }
    }

    pub fn os(os: PlatformOs) -> Self {
        Self {
            os: Some(os),
            architecture: None,
        }
    }

    pub fn with_architecture(mut self, architecture: PlatformArchitecture) -> Self {
        self.architecture = Some(architecture);
        self
    }

    /// Name given to the manifest generated for this platform, e.g.
    /// `os:linux/architecture:aarch64`. An empty descriptor is named `any`.
    pub fn manifest_name(&self) -> String {
        let mut parts = Vec::new();
        if let Some(os) = self.os {
            parts.push(format!("os:{}", os.as_str()));
        }
        if let Some(architecture) = self.architecture {
            parts.push(format!("architecture:{}", architecture.as_str()));
        }
        if parts.is_empty() {
            "any".to_string()
        } else {
            parts.join("/")
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.manifest_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_name_lists_set_attributes() {
        assert_eq!(Platform::all().manifest_name(), "os:*");
        assert_eq!(
            Platform::os(PlatformOs::Linux)
                .with_architecture(PlatformArchitecture::Aarch64)
                .manifest_name(),
            "os:linux/architecture:aarch64"
        );
        assert_eq!(Platform::default().manifest_name(), "any");
    }

    #[test]
    fn unset_attributes_are_skipped() {
        let json = serde_json::to_string(&Platform::all()).unwrap();
        assert_eq!(json, r#"{"os":"*"}"#);
    }
}
