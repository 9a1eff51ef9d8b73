//! Harness seam — reads live resources and executes compliance rules.
//!
//! Fetching a live version is left to `ResourceProbe` implementations; this
//! module only evaluates a built rule against what the probe reports.

pub mod types;
pub mod evaluator;

pub use types::*;
pub use evaluator::{evaluate_batch, evaluate_rule};
