//! Pipeline errors and non-fatal error collection.

use super::error_code::ComplianceErrorCode;
use super::{ClassificationError, ConfigError, ProbeError};

/// Errors that can occur while building or evaluating compliance rules.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Classification error: {0}")]
    Classification(#[from] ClassificationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Probe error: {0}")]
    Probe(#[from] ProbeError),

    #[error("Rule {rule_id} failed: {source}")]
    Rule {
        rule_id: String,
        #[source]
        source: Box<PipelineError>,
    },
}

impl PipelineError {
    /// Attribute this error to a single rule.
    pub fn for_rule(rule_id: impl Into<String>, error: impl Into<PipelineError>) -> Self {
        Self::Rule {
            rule_id: rule_id.into(),
            source: Box::new(error.into()),
        }
    }

    /// The rule this error is attributed to, if any.
    pub fn rule_id(&self) -> Option<&str> {
        match self {
            Self::Rule { rule_id, .. } => Some(rule_id),
            _ => None,
        }
    }
}

impl ComplianceErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Classification(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Probe(e) => e.error_code(),
            Self::Rule { source, .. } => source.error_code(),
        }
    }
}

/// Result of a batch run that accumulates non-fatal errors.
/// Allows partial results to be returned even when some rules fail.
#[derive(Debug, Default)]
pub struct PipelineResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors collected during the run.
    pub errors: Vec<PipelineError>,
}

impl<T: Default> PipelineResult<T> {
    /// Create a new pipeline result with no errors.
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Add a non-fatal error to the result.
    pub fn add_error(&mut self, error: PipelineError) {
        self.errors.push(error);
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of non-fatal errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
