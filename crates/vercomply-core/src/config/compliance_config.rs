//! Top-level vercomply configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ControlConfig, PolicyConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "vercomply.toml";

pub const ENV_OBSERVED_VERSION: &str = "VERCOMPLY_OBSERVED_VERSION";
pub const ENV_SUPPORTED_VERSIONS: &str = "VERCOMPLY_SUPPORTED_VERSIONS";
pub const ENV_CONTROL_ID: &str = "VERCOMPLY_CONTROL_ID";
pub const ENV_TITLE_PREFIX: &str = "VERCOMPLY_TITLE_PREFIX";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`VERCOMPLY_*`)
/// 3. Project config (`vercomply.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ComplianceConfig {
    pub policy: PolicyConfig,
    pub controls: ControlConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub observed_version: Option<String>,
    pub supported_versions: Option<Vec<String>>,
    pub control_id: Option<String>,
    pub title_prefix: Option<String>,
}

/// Explicit classifier inputs resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyInput {
    /// Empty when no layer supplied one; the classifier rejects it.
    pub observed_version: String,
    pub supported_versions: Vec<String>,
}

impl ComplianceConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ComplianceConfig) -> Result<(), ConfigError> {
        if let Some(ref versions) = config.policy.supported_versions {
            if versions.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "policy.supported_versions".to_string(),
                    message: "must list at least one version".to_string(),
                });
            }
            if versions.iter().any(|v| v.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field: "policy.supported_versions".to_string(),
                    message: "entries must not be blank".to_string(),
                });
            }
        }
        if let Some(ref id) = config.controls.control_id {
            if id.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "controls.control_id".to_string(),
                    message: "must not be blank".to_string(),
                });
            }
        }
        if let Some(ref prefix) = config.controls.title_prefix {
            if prefix.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "controls.title_prefix".to_string(),
                    message: "must not be blank".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Resolve the explicit classifier inputs.
    ///
    /// A missing observed version is passed through as an empty string so
    /// that classification reports it; a missing supported list is a
    /// configuration error because no rule can be built without it. The
    /// config is validated first, so an empty or blank list is rejected here
    /// even when it was assembled in code rather than loaded.
    pub fn policy_input(&self) -> Result<PolicyInput, ConfigError> {
        Self::validate(self)?;
        let supported = self.policy.supported_versions.clone().ok_or_else(|| {
            ConfigError::ValidationFailed {
                field: "policy.supported_versions".to_string(),
                message: "no supported versions configured".to_string(),
            }
        })?;
        Ok(PolicyInput {
            observed_version: self.policy.effective_observed_version().to_string(),
            supported_versions: supported,
        })
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ComplianceConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ComplianceConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut ComplianceConfig, other: &ComplianceConfig) {
        if other.policy.observed_version.is_some() {
            base.policy.observed_version = other.policy.observed_version.clone();
        }
        if other.policy.supported_versions.is_some() {
            base.policy.supported_versions = other.policy.supported_versions.clone();
        }
        if other.controls.control_id.is_some() {
            base.controls.control_id = other.controls.control_id.clone();
        }
        if other.controls.title_prefix.is_some() {
            base.controls.title_prefix = other.controls.title_prefix.clone();
        }
    }

    /// Apply environment variable overrides.
    /// `VERCOMPLY_SUPPORTED_VERSIONS` is a comma-separated list.
    fn apply_env_overrides(config: &mut ComplianceConfig) {
        if let Ok(val) = std::env::var(ENV_OBSERVED_VERSION) {
            config.policy.observed_version = Some(val);
        }
        if let Ok(val) = std::env::var(ENV_SUPPORTED_VERSIONS) {
            config.policy.supported_versions = Some(split_version_list(&val));
        }
        if let Ok(val) = std::env::var(ENV_CONTROL_ID) {
            config.controls.control_id = Some(val);
        }
        if let Ok(val) = std::env::var(ENV_TITLE_PREFIX) {
            config.controls.title_prefix = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ComplianceConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.observed_version {
            config.policy.observed_version = Some(v.clone());
        }
        if let Some(ref v) = cli.supported_versions {
            config.policy.supported_versions = Some(v.clone());
        }
        if let Some(ref v) = cli.control_id {
            config.controls.control_id = Some(v.clone());
        }
        if let Some(ref v) = cli.title_prefix {
            config.controls.title_prefix = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Split a comma-separated version list, dropping blank entries.
pub fn split_version_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
