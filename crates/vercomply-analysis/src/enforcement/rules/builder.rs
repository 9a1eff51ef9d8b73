//! Compliance rule assembly.

use std::time::Instant;

use vercomply_core::config::control_config::{DEFAULT_CONTROL_ID, DEFAULT_TITLE_PREFIX};
use vercomply_core::config::{ComplianceConfig, ControlConfig};
use vercomply_core::errors::{ClassificationError, PipelineError};

use super::types::ComplianceRule;
use crate::enforcement::assertions::AssertionPolaritySelector;
use crate::enforcement::severity::SeverityPolicy;
use crate::enforcement::versions::{Classification, VersionClassifier};

/// Builds compliance rules for one named control.
#[derive(Debug, Clone)]
pub struct ComplianceRuleBuilder {
    control_id: String,
    title_prefix: String,
}

impl ComplianceRuleBuilder {
    pub fn new() -> Self {
        Self {
            control_id: DEFAULT_CONTROL_ID.to_string(),
            title_prefix: DEFAULT_TITLE_PREFIX.to_string(),
        }
    }

    pub fn from_config(config: &ControlConfig) -> Self {
        Self {
            control_id: config.effective_control_id().to_string(),
            title_prefix: config.effective_title_prefix().to_string(),
        }
    }

    pub fn with_control_id(mut self, control_id: impl Into<String>) -> Self {
        self.control_id = control_id.into();
        self
    }

    pub fn with_title_prefix(mut self, title_prefix: impl Into<String>) -> Self {
        self.title_prefix = title_prefix.into();
        self
    }

    pub fn control_id(&self) -> &str {
        &self.control_id
    }

    /// Classify `observed` against `supported` and build the rule.
    pub fn build<S: AsRef<str>>(
        &self,
        observed: &str,
        supported: &[S],
    ) -> Result<ComplianceRule, ClassificationError> {
        let start = Instant::now();
        let classification = VersionClassifier::evaluate(observed, supported)?;
        let rule = self.assemble(&classification);
        tracing::info!(
            rule_id = %rule.id,
            tier = %rule.tier,
            impact = rule.impact,
            polarity = %rule.polarity(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "built compliance rule"
        );
        Ok(rule)
    }

    /// Build the rule from a resolved configuration.
    pub fn build_from_config(config: &ComplianceConfig) -> Result<ComplianceRule, PipelineError> {
        let input = config.policy_input()?;
        let rule = Self::from_config(&config.controls)
            .build(&input.observed_version, &input.supported_versions)?;
        Ok(rule)
    }

    /// Compose a rule from an existing classification.
    pub fn assemble(&self, classification: &Classification) -> ComplianceRule {
        let profile = SeverityPolicy::profile(classification.tier);
        let assertion = AssertionPolaritySelector::select(classification.tier, &classification.versions);
        ComplianceRule {
            id: self.control_id.clone(),
            title: format!("{} - {}", self.title_prefix, profile.title_suffix),
            description: profile.description.to_string(),
            impact: profile.impact,
            severity: profile.level,
            tier: classification.tier,
            observed_version: classification.observed.clone(),
            assertion,
        }
    }
}

impl Default for ComplianceRuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
