//! Supported-version policy configuration.

use serde::{Deserialize, Serialize};

/// The version inputs a compliance rule is built from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PolicyConfig {
    /// Version the deployed resource reports (usually exported by the
    /// provisioning step).
    pub observed_version: Option<String>,
    /// Versions the platform currently supports, in any order.
    pub supported_versions: Option<Vec<String>>,
}

impl PolicyConfig {
    /// Returns the observed version, or an empty string when unset.
    pub fn effective_observed_version(&self) -> &str {
        self.observed_version.as_deref().unwrap_or("")
    }
}
