//! Severity policy — tier → impact weight, description, title suffix.

pub mod types;
pub mod policy;

pub use types::*;
pub use policy::SeverityPolicy;
