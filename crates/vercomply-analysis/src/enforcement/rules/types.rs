//! Core types for compliance rules.

use serde::{Deserialize, Serialize};

use crate::enforcement::assertions::{Assertion, Polarity};
use crate::enforcement::severity::SeverityLevel;
use crate::enforcement::versions::Tier;

/// One executable version-compliance rule.
///
/// Built fresh per evaluation and handed to the execution harness, which
/// reads the live version, evaluates `assertion` against it, and reports
/// `impact` whatever the outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRule {
    /// Stable control id, e.g. "cluster-version".
    pub id: String,
    /// "{prefix} - {tier suffix}".
    pub title: String,
    pub description: String,
    pub impact: f64,
    pub severity: SeverityLevel,
    pub tier: Tier,
    /// Version the rule was classified from.
    pub observed_version: String,
    #[serde(flatten)]
    pub assertion: Assertion,
}

impl ComplianceRule {
    pub fn polarity(&self) -> Polarity {
        self.assertion.polarity
    }

    pub fn reference_list(&self) -> &[String] {
        &self.assertion.reference_list
    }

    /// Whether the rule passes for the given live value.
    pub fn holds(&self, live_value: &str) -> bool {
        self.assertion.holds(live_value)
    }
}
