//! Core types for generated assertions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the live value must be inside or outside the reference list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Polarity {
    Membership,
    NonMembership,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Membership => write!(f, "membership"),
            Self::NonMembership => write!(f, "non-membership"),
        }
    }
}

/// A list-containment check against a live value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assertion {
    pub polarity: Polarity,
    pub reference_list: Vec<String>,
}

impl Assertion {
    pub fn membership(reference_list: Vec<String>) -> Self {
        Self {
            polarity: Polarity::Membership,
            reference_list,
        }
    }

    pub fn non_membership(reference_list: Vec<String>) -> Self {
        Self {
            polarity: Polarity::NonMembership,
            reference_list,
        }
    }

    /// Evaluate the assertion against a live value (trimmed, exact match).
    pub fn holds(&self, live_value: &str) -> bool {
        let live_value = live_value.trim();
        let found = self.reference_list.iter().any(|v| v == live_value);
        match self.polarity {
            Polarity::Membership => found,
            Polarity::NonMembership => !found,
        }
    }
}
