//! Configuration system for vercomply.
//! TOML-based, 4-layer resolution: CLI > env > project > defaults.

pub mod compliance_config;
pub mod control_config;
pub mod policy_config;

pub use compliance_config::{CliOverrides, ComplianceConfig, PolicyInput};
pub use control_config::ControlConfig;
pub use policy_config::PolicyConfig;
