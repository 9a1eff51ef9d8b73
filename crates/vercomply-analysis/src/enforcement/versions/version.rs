//! Version identifiers and their total order.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;
use vercomply_core::errors::ClassificationError;

/// Maximum number of numeric segments accepted (e.g. `1.2.3.4`).
pub const MAX_SEGMENTS: usize = 4;

/// One dot-separated identifier of a pre-release tag.
///
/// Numeric identifiers sort below alphanumeric ones and compare by value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreIdentifier {
    Numeric(u64),
    Alpha(String),
}

/// A parsed version identifier.
///
/// Grammar: optional `v`/`V`, one to four dot-separated unsigned integers,
/// optional `-prerelease` tag of dot-separated `[0-9A-Za-z-]` identifiers.
/// Missing trailing segments compare as zero, a pre-release sorts below its
/// release, tags follow semver precedence, and the raw text breaks any
/// remaining tie so that ordering agrees with string equality.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    segments: SmallVec<[u64; MAX_SEGMENTS]>,
    /// Empty for a release.
    pre: Vec<PreIdentifier>,
}

impl Version {
    /// Parse a version identifier. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, ClassificationError> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(invalid(input, "empty version"));
        }

        let body = raw
            .strip_prefix('v')
            .or_else(|| raw.strip_prefix('V'))
            .unwrap_or(raw);

        let (core, pre) = match body.split_once('-') {
            Some((_, "")) => return Err(invalid(input, "empty pre-release tag")),
            Some((core, tag)) => (core, parse_pre_release(input, tag)?),
            None => (body, Vec::new()),
        };

        let mut segments = SmallVec::new();
        for part in core.split('.') {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid(
                    input,
                    &format!("segment '{part}' is not an unsigned integer"),
                ));
            }
            let value = part
                .parse::<u64>()
                .map_err(|_| invalid(input, &format!("segment '{part}' is out of range")))?;
            segments.push(value);
        }

        if segments.len() > MAX_SEGMENTS {
            return Err(invalid(
                input,
                &format!("more than {MAX_SEGMENTS} numeric segments"),
            ));
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
            pre,
        })
    }

    /// The identifier as supplied, trimmed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Numeric segments, most significant first.
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// The pre-release tag without its leading `-`.
    pub fn pre_release(&self) -> Option<&str> {
        self.raw.split_once('-').map(|(_, tag)| tag)
    }

    fn segment(&self, index: usize) -> u64 {
        self.segments.get(index).copied().unwrap_or(0)
    }
}

fn parse_pre_release(input: &str, tag: &str) -> Result<Vec<PreIdentifier>, ClassificationError> {
    tag.split('.')
        .map(|id| {
            if id.is_empty() {
                return Err(invalid(input, "empty pre-release identifier"));
            }
            if !id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
                return Err(invalid(
                    input,
                    &format!("pre-release identifier '{id}' has characters outside [0-9A-Za-z-]"),
                ));
            }
            if id.bytes().all(|b| b.is_ascii_digit()) {
                id.parse::<u64>()
                    .map(PreIdentifier::Numeric)
                    .map_err(|_| invalid(input, &format!("pre-release identifier '{id}' is out of range")))
            } else {
                Ok(PreIdentifier::Alpha(id.to_string()))
            }
        })
        .collect()
}

fn invalid(value: &str, reason: &str) -> ClassificationError {
    ClassificationError::InvalidVersionFormat {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let width = self.segments.len().max(other.segments.len());
        (0..width)
            .map(|i| self.segment(i).cmp(&other.segment(i)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
            .then_with(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.pre.cmp(&other.pre),
            })
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn numeric_not_lexical_order() {
        assert!(v("1.10") > v("1.9"));
        assert!(v("1.27.3") > v("1.27.1"));
        assert!(v("2") > v("1.99.99"));
    }

    #[test]
    fn missing_segments_compare_as_zero_then_by_text() {
        assert_eq!(v("1.27").segments(), &[1, 27]);
        assert_ne!(v("1.27"), v("1.27.0"));
        assert_eq!(
            v("1.27").cmp(&v("1.27.0")),
            "1.27".cmp("1.27.0"),
        );
    }

    #[test]
    fn pre_release_sorts_below_release() {
        assert!(v("1.28.0-rc.1") < v("1.28.0"));
        assert!(v("1.28.0-rc.1") > v("1.27.9"));
        assert_eq!(v("1.28.0-rc.1").pre_release(), Some("rc.1"));
    }

    #[test]
    fn pre_release_identifiers_follow_semver_precedence() {
        assert!(v("1.28.0-rc.10") > v("1.28.0-rc.2"));
        assert!(v("1.0.0-alpha") < v("1.0.0-alpha.1"));
        assert!(v("1.0.0-alpha.1") < v("1.0.0-alpha.beta"));
        assert!(v("1.0.0-alpha.beta") < v("1.0.0-beta"));
        assert!(v("1.0.0-beta.11") < v("1.0.0-rc.1"));
        assert!(v("1.0.0-rc.1") < v("1.0.0"));
        assert_eq!(v("1.0.0-x-y.7").pre_release(), Some("x-y.7"));
    }

    #[test]
    fn prefix_and_whitespace_accepted() {
        assert_eq!(v("  v1.26.3 ").as_str(), "v1.26.3");
        assert_eq!(v("V1.26").segments(), &[1, 26]);
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in [
            "", "   ", "latest", "1..2", "1.2.", "1.+2", "1.2-", "1.2.3.4.5", "v", "1.2-!!!",
            "1.2-rc..1", "1.2-rc.", "1.2-rc_1",
        ] {
            let err = Version::parse(bad).unwrap_err();
            assert!(
                matches!(err, ClassificationError::InvalidVersionFormat { .. }),
                "{bad:?} should be rejected, got {err:?}"
            );
        }
    }
}
