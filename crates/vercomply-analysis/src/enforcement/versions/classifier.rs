//! Maps an observed version onto its support tier.

use vercomply_core::errors::ClassificationError;

use super::partitioner::{PartitionedVersions, VersionBandPartitioner};
use super::types::Tier;

/// Outcome of classifying one observed version against one policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Observed version, trimmed.
    pub observed: String,
    pub tier: Tier,
    pub versions: PartitionedVersions,
}

/// Classifies observed versions against partitioned bands.
pub struct VersionClassifier;

impl VersionClassifier {
    /// Classify `observed` against already partitioned versions.
    ///
    /// An empty list → `EmptySupportedList`. Absent from the list →
    /// `OutOfSupport`. Present but beyond the last band →
    /// `AmbiguousVersionTier`. With duplicate entries the most recent
    /// band containing the version wins.
    pub fn classify(
        observed: &str,
        versions: &PartitionedVersions,
    ) -> Result<Tier, ClassificationError> {
        let observed = observed.trim();
        if observed.is_empty() {
            return Err(ClassificationError::MissingObservedVersion);
        }
        if versions.is_empty() {
            return Err(ClassificationError::EmptySupportedList);
        }

        let Some(position) = versions.position(observed) else {
            tracing::debug!(observed, tier = %Tier::OutOfSupport, "version not in supported list");
            return Ok(Tier::OutOfSupport);
        };

        let tier = versions
            .bands()
            .into_iter()
            .find(|band| band.contains(observed))
            .map(|band| band.tier)
            .ok_or_else(|| ClassificationError::AmbiguousVersionTier {
                version: observed.to_string(),
                position,
            })?;

        tracing::debug!(observed, position, tier = %tier, "classified observed version");
        Ok(tier)
    }

    /// Partition `supported` and classify `observed` in one step.
    pub fn evaluate<S: AsRef<str>>(
        observed: &str,
        supported: &[S],
    ) -> Result<Classification, ClassificationError> {
        if observed.trim().is_empty() {
            return Err(ClassificationError::MissingObservedVersion);
        }
        let versions = VersionBandPartitioner::partition(supported)?;
        let tier = Self::classify(observed, &versions)?;
        Ok(Classification {
            observed: observed.trim().to_string(),
            tier,
            versions,
        })
    }
}
