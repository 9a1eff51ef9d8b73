//! Batch rule construction with per-rule failure isolation.

use serde::{Deserialize, Serialize};
use vercomply_core::errors::{ComplianceErrorCode, PipelineError, PipelineResult};

use super::builder::ComplianceRuleBuilder;
use super::types::ComplianceRule;

/// Inputs for one rule in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceRequest {
    /// Control id; also used as the attribution key for failures.
    pub id: String,
    pub title_prefix: Option<String>,
    pub observed_version: String,
    pub supported_versions: Vec<String>,
}

/// Build one rule per request.
///
/// A failing request is recorded against its id and does not stop the
/// remaining requests. Rules come back in request order.
pub fn build_all(requests: &[ComplianceRequest]) -> PipelineResult<Vec<ComplianceRule>> {
    let mut result = PipelineResult::new(Vec::with_capacity(requests.len()));

    for request in requests {
        let mut builder = ComplianceRuleBuilder::new().with_control_id(&request.id);
        if let Some(ref prefix) = request.title_prefix {
            builder = builder.with_title_prefix(prefix);
        }

        match builder.build(&request.observed_version, &request.supported_versions) {
            Ok(rule) => result.data.push(rule),
            Err(e) => {
                tracing::warn!(
                    rule_id = %request.id,
                    code = e.error_code(),
                    error = %e,
                    "rule construction failed"
                );
                result.add_error(PipelineError::for_rule(&request.id, e));
            }
        }
    }

    result
}
