//! vercomply-analysis: tiered version-compliance classification.
//!
//! Turns a supported-version list and an observed version into a single
//! compliance rule whose assertion polarity and impact weight encode how far
//! behind the deployment is.

pub mod enforcement;
