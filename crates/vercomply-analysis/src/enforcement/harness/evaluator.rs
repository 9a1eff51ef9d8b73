//! Executes compliance rules against resource probes.

use vercomply_core::errors::{ComplianceErrorCode, PipelineError, PipelineResult, ProbeError};

use super::types::{ResourceProbe, RuleOutcome};
use crate::enforcement::rules::ComplianceRule;

/// Read the live value from `probe` and evaluate `rule` against it.
pub fn evaluate_rule(
    rule: &ComplianceRule,
    probe: &dyn ResourceProbe,
) -> Result<RuleOutcome, ProbeError> {
    let live_value = probe.reported_version()?;
    let passed = rule.holds(&live_value);

    tracing::debug!(
        rule_id = %rule.id,
        resource = probe.resource(),
        live_value = %live_value,
        passed,
        impact = rule.impact,
        "evaluated compliance rule"
    );

    Ok(RuleOutcome {
        rule_id: rule.id.clone(),
        title: rule.title.clone(),
        description: rule.description.clone(),
        resource: probe.resource().to_string(),
        live_value,
        passed,
        impact: rule.impact,
        severity: rule.severity,
        details: serde_json::json!({
            "tier": rule.tier,
            "observed_version": rule.observed_version,
            "polarity": rule.polarity(),
            "reference_list": rule.reference_list(),
        }),
    })
}

/// Evaluate each rule against its probe; probe failures are isolated per rule.
pub fn evaluate_batch<'a, I>(pairs: I) -> PipelineResult<Vec<RuleOutcome>>
where
    I: IntoIterator<Item = (&'a ComplianceRule, &'a dyn ResourceProbe)>,
{
    let mut result = PipelineResult::new(Vec::new());

    for (rule, probe) in pairs {
        match evaluate_rule(rule, probe) {
            Ok(outcome) => result.data.push(outcome),
            Err(e) => {
                tracing::warn!(
                    rule_id = %rule.id,
                    resource = probe.resource(),
                    code = e.error_code(),
                    error = %e,
                    "rule evaluation failed"
                );
                result.add_error(PipelineError::for_rule(&rule.id, e));
            }
        }
    }

    result
}
