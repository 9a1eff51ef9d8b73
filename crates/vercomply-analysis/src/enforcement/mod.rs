//! Enforcement layer — transforms a version policy into an executable rule.
//!
//! Subsystems:
//! - `versions` — version grammar, band partitioning, tier classification
//! - `severity` — tier → impact weight, description, title suffix
//! - `assertions` — membership / non-membership assertion selection
//! - `rules` — rule assembly and batch construction
//! - `harness` — probe seam for executing rules against live resources

pub mod versions;
pub mod severity;
pub mod assertions;
pub mod rules;
pub mod harness;
