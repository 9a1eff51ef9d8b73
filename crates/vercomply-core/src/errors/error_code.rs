//! ComplianceErrorCode trait for attributable findings.

/// Stable machine-readable code attached to every vercomply error.
///
/// The execution harness surfaces a failed rule as a finding; the code lets
/// it group failures without parsing the human-readable message.
pub trait ComplianceErrorCode {
    /// Returns the error code string (e.g., "INVALID_VERSION_FORMAT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted coded string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_VERSION_FORMAT: &str = "INVALID_VERSION_FORMAT";
pub const MISSING_OBSERVED_VERSION: &str = "MISSING_OBSERVED_VERSION";
pub const EMPTY_SUPPORTED_LIST: &str = "EMPTY_SUPPORTED_LIST";
pub const AMBIGUOUS_VERSION_TIER: &str = "AMBIGUOUS_VERSION_TIER";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PROBE_ERROR: &str = "PROBE_ERROR";
