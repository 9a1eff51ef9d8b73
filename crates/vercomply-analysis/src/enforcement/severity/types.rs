//! Core types for the severity policy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse reporting level derived from a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Everything the severity policy attaches to a tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeverityProfile {
    /// Impact weight in [0.0, 1.0].
    pub impact: f64,
    pub level: SeverityLevel,
    pub description: &'static str,
    pub title_suffix: &'static str,
}
