//! Sorts a supported-version list newest first and slices it into bands.

use smallvec::SmallVec;
use vercomply_core::errors::ClassificationError;

use super::types::{Band, Tier};
use super::version::Version;

/// Number of versions in each band.
pub const BAND_WIDTH: usize = 2;

/// A supported-version list sorted newest first, with its three bands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionedVersions {
    sorted: Vec<Version>,
    current: Band,
    previous: Band,
    last: Band,
}

impl PartitionedVersions {
    /// The full list, newest first.
    pub fn sorted(&self) -> &[Version] {
        &self.sorted
    }

    /// The full list as identifiers, newest first.
    pub fn sorted_strings(&self) -> Vec<String> {
        self.sorted.iter().map(|v| v.as_str().to_string()).collect()
    }

    pub fn current(&self) -> &Band {
        &self.current
    }

    pub fn previous(&self) -> &Band {
        &self.previous
    }

    pub fn last(&self) -> &Band {
        &self.last
    }

    /// The band backing `tier`; `OutOfSupport` has none.
    pub fn band(&self, tier: Tier) -> Option<&Band> {
        match tier {
            Tier::Current => Some(&self.current),
            Tier::Previous => Some(&self.previous),
            Tier::Last => Some(&self.last),
            Tier::OutOfSupport => None,
        }
    }

    /// Bands in recency order.
    pub fn bands(&self) -> [&Band; 3] {
        [&self.current, &self.previous, &self.last]
    }

    /// First position of `version` in the sorted list.
    pub fn position(&self, version: &str) -> Option<usize> {
        self.sorted.iter().position(|v| v.as_str() == version)
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

/// Splits supported-version lists into current, previous and last bands.
pub struct VersionBandPartitioner;

impl VersionBandPartitioner {
    /// Parse, sort descending, and band `versions`.
    ///
    /// Duplicates are kept. Any unparseable entry fails the whole list with
    /// `InvalidVersionFormat`. The input slice is never modified.
    pub fn partition<S: AsRef<str>>(
        versions: &[S],
    ) -> Result<PartitionedVersions, ClassificationError> {
        let mut sorted = versions
            .iter()
            .map(|v| Version::parse(v.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        sorted.sort_by(|a, b| b.cmp(a));

        let current = slice_band(&sorted, Tier::Current);
        let previous = slice_band(&sorted, Tier::Previous);
        let last = slice_band(&sorted, Tier::Last);

        tracing::debug!(
            supported_count = sorted.len(),
            current = current.len(),
            previous = previous.len(),
            last = last.len(),
            "partitioned supported versions"
        );
        if sorted.len() < Tier::banded().len() * BAND_WIDTH {
            tracing::debug!(
                supported_count = sorted.len(),
                "supported list shorter than all bands; trailing bands are partial"
            );
        }

        Ok(PartitionedVersions {
            sorted,
            current,
            previous,
            last,
        })
    }
}

fn slice_band(sorted: &[Version], tier: Tier) -> Band {
    let index = tier.band_index().unwrap_or(0);
    let start = (index * BAND_WIDTH).min(sorted.len());
    let end = (start + BAND_WIDTH).min(sorted.len());
    let versions: SmallVec<[String; BAND_WIDTH]> = sorted[start..end]
        .iter()
        .map(|v| v.as_str().to_string())
        .collect();
    Band::new(tier, versions)
}
