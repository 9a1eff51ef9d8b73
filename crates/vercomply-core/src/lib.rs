//! vercomply-core: errors, error codes, configuration, and tracing shared by
//! the version-compliance engine.

pub mod config;
pub mod errors;
pub mod tracing;

pub use config::ComplianceConfig;
pub use errors::{
    ClassificationError, ComplianceErrorCode, ConfigError, PipelineError, PipelineResult,
    ProbeError,
};
