//! Version classification errors.

use super::error_code::{self, ComplianceErrorCode};

/// Errors that can occur while partitioning a supported-version list or
/// classifying an observed version against it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassificationError {
    #[error("Invalid version format '{value}': {reason}")]
    InvalidVersionFormat { value: String, reason: String },

    #[error("No observed version supplied")]
    MissingObservedVersion,

    #[error("Supported version list is empty")]
    EmptySupportedList,

    #[error("Version {version} is supported (position {position}) but outside the current, previous and last bands")]
    AmbiguousVersionTier { version: String, position: usize },
}

impl ComplianceErrorCode for ClassificationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidVersionFormat { .. } => error_code::INVALID_VERSION_FORMAT,
            Self::MissingObservedVersion => error_code::MISSING_OBSERVED_VERSION,
            Self::EmptySupportedList => error_code::EMPTY_SUPPORTED_LIST,
            Self::AmbiguousVersionTier { .. } => error_code::AMBIGUOUS_VERSION_TIER,
        }
    }
}
