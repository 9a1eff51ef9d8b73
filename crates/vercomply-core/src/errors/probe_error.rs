//! Resource probe errors.

use super::error_code::{self, ComplianceErrorCode};

/// Errors raised by a resource probe while reading a live resource.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Property {property} missing on {resource}")]
    PropertyMissing { resource: String, property: String },

    #[error("Probe failed: {0}")]
    ProbeFailed(String),
}

impl ComplianceErrorCode for ProbeError {
    fn error_code(&self) -> &'static str {
        error_code::PROBE_ERROR
    }
}
