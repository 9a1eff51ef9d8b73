//! Core types for version tiers and bands.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::partitioner::BAND_WIDTH;

/// Support tier of an observed version, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Current,
    Previous,
    Last,
    OutOfSupport,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Previous => "previous",
            Self::Last => "last",
            Self::OutOfSupport => "out-of-support",
        }
    }

    /// All tiers, ordered from most to least recent.
    pub fn all() -> &'static [Tier] {
        &[Self::Current, Self::Previous, Self::Last, Self::OutOfSupport]
    }

    /// Tiers backed by a band of the sorted list, in band order.
    pub fn banded() -> &'static [Tier] {
        &[Self::Current, Self::Previous, Self::Last]
    }

    /// Index of this tier's band in the sorted list, if it has one.
    pub fn band_index(&self) -> Option<usize> {
        match self {
            Self::Current => Some(0),
            Self::Previous => Some(1),
            Self::Last => Some(2),
            Self::OutOfSupport => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tier's slice of the sorted supported-version list.
///
/// Holds at most `BAND_WIDTH` entries; shorter policies leave trailing
/// bands partial or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub tier: Tier,
    pub versions: SmallVec<[String; BAND_WIDTH]>,
}

impl Band {
    pub fn new(tier: Tier, versions: SmallVec<[String; BAND_WIDTH]>) -> Self {
        Self { tier, versions }
    }

    /// Exact membership test. An empty band contains nothing.
    pub fn contains(&self, version: &str) -> bool {
        self.versions.iter().any(|v| v == version)
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.versions.to_vec()
    }
}
