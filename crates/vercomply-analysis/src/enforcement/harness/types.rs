//! Core types for rule execution.

use serde::{Deserialize, Serialize};
use vercomply_core::errors::ProbeError;

use crate::enforcement::severity::SeverityLevel;

/// Reads the version a live resource reports.
pub trait ResourceProbe: Send + Sync {
    /// Name of the probed resource, used for attribution.
    fn resource(&self) -> &str;

    /// The version property the resource currently reports.
    fn reported_version(&self) -> Result<String, ProbeError>;
}

/// Probe answering with a fixed value.
///
/// Useful when the provisioning step already exported the live version.
#[derive(Debug, Clone)]
pub struct StaticProbe {
    resource: String,
    version: Option<String>,
}

impl StaticProbe {
    pub fn new(resource: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            version: Some(version.into()),
        }
    }

    /// A probe for a resource that exposes no version property.
    pub fn missing(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            version: None,
        }
    }
}

impl ResourceProbe for StaticProbe {
    fn resource(&self) -> &str {
        &self.resource
    }

    fn reported_version(&self) -> Result<String, ProbeError> {
        self.version.clone().ok_or_else(|| ProbeError::PropertyMissing {
            resource: self.resource.clone(),
            property: "version".to_string(),
        })
    }
}

/// Result of executing one rule against one live resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule_id: String,
    pub title: String,
    pub description: String,
    pub resource: String,
    pub live_value: String,
    pub passed: bool,
    /// Carried from the rule whether or not the assertion passed.
    pub impact: f64,
    pub severity: SeverityLevel,
    pub details: serde_json::Value,
}
