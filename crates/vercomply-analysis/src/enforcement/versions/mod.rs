//! Supported-version handling: parse, sort, band, classify.

pub mod types;
pub mod version;
pub mod partitioner;
pub mod classifier;

pub use types::*;
pub use version::{PreIdentifier, Version};
pub use partitioner::{PartitionedVersions, VersionBandPartitioner, BAND_WIDTH};
pub use classifier::{Classification, VersionClassifier};
