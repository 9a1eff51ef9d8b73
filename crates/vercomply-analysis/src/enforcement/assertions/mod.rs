//! Assertion selection — membership or non-membership in a reference list.

pub mod types;
pub mod polarity;

pub use types::*;
pub use polarity::AssertionPolaritySelector;
