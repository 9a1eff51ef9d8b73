//! Tier → assertion selection.
//!
//! Only the current tier yields an assertion that can pass. Previous and
//! last assert non-membership in the very band the version was found in,
//! and out-of-support asserts membership in a list the version is known to
//! be absent from, so those rules always fail and their impact carries the
//! severity.

use super::types::Assertion;
use crate::enforcement::versions::{PartitionedVersions, Tier};

/// Chooses assertion polarity and reference list per tier.
pub struct AssertionPolaritySelector;

impl AssertionPolaritySelector {
    pub fn select(tier: Tier, versions: &PartitionedVersions) -> Assertion {
        match tier {
            Tier::Current => Assertion::membership(versions.current().to_vec()),
            Tier::Previous => Assertion::non_membership(versions.previous().to_vec()),
            Tier::Last => Assertion::non_membership(versions.last().to_vec()),
            Tier::OutOfSupport => Assertion::membership(versions.sorted_strings()),
        }
    }
}
