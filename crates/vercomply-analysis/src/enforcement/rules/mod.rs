//! Rules — composes classification, severity and assertion into one rule.

pub mod types;
pub mod builder;
pub mod batch;

pub use types::*;
pub use builder::ComplianceRuleBuilder;
pub use batch::{build_all, ComplianceRequest};
