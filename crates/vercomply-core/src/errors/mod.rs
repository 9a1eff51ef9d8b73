//! Error handling for vercomply.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod classification_error;
pub mod config_error;
pub mod error_code;
pub mod pipeline_error;
pub mod probe_error;

pub use classification_error::ClassificationError;
pub use config_error::ConfigError;
pub use error_code::ComplianceErrorCode;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use probe_error::ProbeError;
