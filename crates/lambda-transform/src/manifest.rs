//! Per-platform manifest staging.

use lambda_model::constants::LAMBDA_COMPLETE_ARTIFACT_URI;
use lambda_model::{ComponentArtifact, Platform, PlatformSpecificManifest, Unarchive};

/// A platform collected while the recipe is assembled, before it becomes a
/// [`PlatformSpecificManifest`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformData {
    pub platform: Platform,
    pub name: Option<String>,
    pub artifacts: Vec<ComponentArtifact>,
}

impl PlatformData {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            name: None,
            artifacts: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_artifact(mut self, artifact: ComponentArtifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    pub fn build_manifest(self) -> PlatformSpecificManifest {
        PlatformSpecificManifest {
            platform: self.platform,
            name: self.name,
            artifacts: self.artifacts,
            lifecycle: Default::default(),
        }
    }
}

/// The zipped function code, unpacked by the host before startup.
pub fn lambda_artifact() -> ComponentArtifact {
    ComponentArtifact {
        uri: LAMBDA_COMPLETE_ARTIFACT_URI.to_string(),
        unarchive: Unarchive::Zip,
    }
}

/// One staged entry per platform, in input order, each carrying the Lambda
/// artifact.
pub fn stage_platforms(platforms: &[Platform]) -> Vec<PlatformData> {
    platforms
        .iter()
        .map(|platform| {
            PlatformData::new(*platform)
                .with_name(platform.manifest_name())
                .with_artifact(lambda_artifact())
        })
        .collect()
}
