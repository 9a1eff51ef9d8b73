//! Fixed severity lookup table.

use super::types::{SeverityLevel, SeverityProfile};
use crate::enforcement::versions::Tier;

pub const IMPACT_CURRENT: f64 = 0.0;
pub const IMPACT_PREVIOUS: f64 = 0.3;
pub const IMPACT_LAST: f64 = 1.0;
pub const IMPACT_OUT_OF_SUPPORT: f64 = 1.0;

/// Maps tiers to impact, level, description and title suffix.
pub struct SeverityPolicy;

impl SeverityPolicy {
    /// Total over `Tier`; never fails.
    pub fn profile(tier: Tier) -> SeverityProfile {
        match tier {
            Tier::Current => SeverityProfile {
                impact: IMPACT_CURRENT,
                level: SeverityLevel::Info,
                description: "Running the current version",
                title_suffix: "Current",
            },
            Tier::Previous => SeverityProfile {
                impact: IMPACT_PREVIOUS,
                level: SeverityLevel::Warning,
                description: "Running the previous version",
                title_suffix: "Previous",
            },
            Tier::Last => SeverityProfile {
                impact: IMPACT_LAST,
                level: SeverityLevel::Error,
                description: "Running the last supported version, consider upgrading",
                title_suffix: "Last",
            },
            Tier::OutOfSupport => SeverityProfile {
                impact: IMPACT_OUT_OF_SUPPORT,
                level: SeverityLevel::Error,
                description: "Current version is out of support",
                title_suffix: "Out of date",
            },
        }
    }

    pub fn impact(tier: Tier) -> f64 {
        Self::profile(tier).impact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_never_decreases_with_staleness() {
        let impacts: Vec<f64> = Tier::all().iter().map(|&t| SeverityPolicy::impact(t)).collect();
        assert!(impacts.windows(2).all(|w| w[0] <= w[1]), "{impacts:?}");
        assert!(impacts.iter().all(|i| (0.0..=1.0).contains(i)));
    }

    #[test]
    fn levels_follow_tiers() {
        assert_eq!(SeverityPolicy::profile(Tier::Current).level, SeverityLevel::Info);
        assert_eq!(SeverityPolicy::profile(Tier::Previous).level, SeverityLevel::Warning);
        assert_eq!(SeverityPolicy::profile(Tier::Last).level, SeverityLevel::Error);
        assert_eq!(SeverityPolicy::profile(Tier::OutOfSupport).level, SeverityLevel::Error);
    }
}
