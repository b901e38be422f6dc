//! Options controlling how strictly template parameters are checked.

use serde::{Deserialize, Serialize};

/// Which semantic rules run on top of the always-on checks (non-empty
/// platform list, non-blank ARN and handler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Enforce the lower bounds on timeouts, queue size, instance count,
    /// idle time and container memory.
    pub check_ranges: bool,

    /// Enforce device and volume mount path rules.
    pub check_mount_paths: bool,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// All rules enabled, matching what the cloud component service accepts.
    pub fn strict() -> Self {
        Self {
            check_ranges: true,
            check_mount_paths: true,
        }
    }

    pub fn with_ranges(mut self, enable: bool) -> Self {
        self.check_ranges = enable;
        self
    }

    pub fn with_mount_paths(mut self, enable: bool) -> Self {
        self.check_mount_paths = enable;
        self
    }
}
