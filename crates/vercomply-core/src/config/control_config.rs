//! Control naming configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTROL_ID: &str = "cluster-version";
pub const DEFAULT_TITLE_PREFIX: &str = "Cluster Version";

/// Identity of the generated control.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ControlConfig {
    /// Stable control id. Default: "cluster-version".
    pub control_id: Option<String>,
    /// Title prefix; the tier suffix is appended. Default: "Cluster Version".
    pub title_prefix: Option<String>,
}

impl ControlConfig {
    /// Returns the effective control id, defaulting to "cluster-version".
    pub fn effective_control_id(&self) -> &str {
        self.control_id.as_deref().unwrap_or(DEFAULT_CONTROL_ID)
    }

    /// Returns the effective title prefix, defaulting to "Cluster Version".
    pub fn effective_title_prefix(&self) -> &str {
        self.title_prefix.as_deref().unwrap_or(DEFAULT_TITLE_PREFIX)
    }
}
