//! Version partitioning and tier classification.
//! T1-PAR-01 through T1-CLS-07

use vercomply_analysis::enforcement::versions::*;
use vercomply_core::errors::ClassificationError;

fn supported() -> Vec<String> {
    ["1.22", "1.23", "1.24", "1.25", "1.26", "1.27"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// T1-PAR-01: Sorted descending and sliced into pairs.
#[test]
fn test_partition_six_versions() {
    let p = VersionBandPartitioner::partition(&supported()).unwrap();

    assert_eq!(
        p.sorted_strings(),
        vec!["1.27", "1.26", "1.25", "1.24", "1.23", "1.22"]
    );
    assert_eq!(p.current().to_vec(), vec!["1.27", "1.26"]);
    assert_eq!(p.previous().to_vec(), vec!["1.25", "1.24"]);
    assert_eq!(p.last().to_vec(), vec!["1.23", "1.22"]);
    assert_eq!(p.band(Tier::OutOfSupport), None);
}

/// T1-PAR-02: Caller's list is left untouched.
#[test]
fn test_partition_does_not_mutate_input() {
    let input = supported();
    let before = input.clone();
    let _ = VersionBandPartitioner::partition(&input).unwrap();
    assert_eq!(input, before);
}

/// T1-PAR-03: Short lists give partial and empty trailing bands.
#[test]
fn test_partition_short_list() {
    let p = VersionBandPartitioner::partition(&["1.26", "1.27", "1.25"]).unwrap();
    assert_eq!(p.current().to_vec(), vec!["1.27", "1.26"]);
    assert_eq!(p.previous().to_vec(), vec!["1.25"]);
    assert!(p.last().is_empty());
    assert!(!p.last().contains("1.25"));

    let empty: [&str; 0] = [];
    let p = VersionBandPartitioner::partition(&empty).unwrap();
    assert!(p.is_empty());
    assert!(p.bands().iter().all(|b| b.is_empty()));
}

/// T1-PAR-04: Ordering is numeric, not lexical.
#[test]
fn test_partition_numeric_order() {
    let p = VersionBandPartitioner::partition(&["1.9.11", "1.10.3", "1.10.13", "1.8.0"]).unwrap();
    assert_eq!(p.sorted_strings(), vec!["1.10.13", "1.10.3", "1.9.11", "1.8.0"]);
}

/// T1-PAR-05: One bad entry fails the whole list.
#[test]
fn test_partition_invalid_entry() {
    let err = VersionBandPartitioner::partition(&["1.27", "latest", "1.26"]).unwrap_err();
    match err {
        ClassificationError::InvalidVersionFormat { value, .. } => assert_eq!(value, "latest"),
        other => panic!("Expected InvalidVersionFormat, got {other:?}"),
    }
}

/// T1-PAR-06: Duplicates are kept, not collapsed.
#[test]
fn test_partition_keeps_duplicates() {
    let p = VersionBandPartitioner::partition(&["1.27", "1.27", "1.26"]).unwrap();
    assert_eq!(p.len(), 3);
    assert_eq!(p.current().to_vec(), vec!["1.27", "1.27"]);
    assert_eq!(p.previous().to_vec(), vec!["1.26"]);
}

/// T1-CLS-01: Each band maps to its tier; absence is out of support.
#[test]
fn test_classify_each_tier() {
    let p = VersionBandPartitioner::partition(&supported()).unwrap();
    assert_eq!(VersionClassifier::classify("1.27", &p).unwrap(), Tier::Current);
    assert_eq!(VersionClassifier::classify("1.26", &p).unwrap(), Tier::Current);
    assert_eq!(VersionClassifier::classify("1.25", &p).unwrap(), Tier::Previous);
    assert_eq!(VersionClassifier::classify("1.23", &p).unwrap(), Tier::Last);
    assert_eq!(VersionClassifier::classify("1.22", &p).unwrap(), Tier::Last);
    assert_eq!(VersionClassifier::classify("1.20", &p).unwrap(), Tier::OutOfSupport);
    assert_eq!(VersionClassifier::classify("1.28", &p).unwrap(), Tier::OutOfSupport);
}

/// T1-CLS-02: Empty or blank observed version is rejected.
#[test]
fn test_classify_missing_observed() {
    let p = VersionBandPartitioner::partition(&supported()).unwrap();
    for observed in ["", "   "] {
        assert_eq!(
            VersionClassifier::classify(observed, &p).unwrap_err(),
            ClassificationError::MissingObservedVersion
        );
    }
    assert_eq!(
        VersionClassifier::evaluate("", &supported()).unwrap_err(),
        ClassificationError::MissingObservedVersion
    );
}

/// T1-CLS-03: A supported version past the last band is ambiguous.
#[test]
fn test_classify_beyond_last_band() {
    let mut versions = supported();
    versions.push("1.21".to_string());
    let p = VersionBandPartitioner::partition(&versions).unwrap();
    assert_eq!(
        VersionClassifier::classify("1.21", &p).unwrap_err(),
        ClassificationError::AmbiguousVersionTier {
            version: "1.21".to_string(),
            position: 6,
        }
    );
    // Versions inside the bands still classify normally.
    assert_eq!(VersionClassifier::classify("1.22", &p).unwrap(), Tier::Last);
}

/// T1-CLS-04: Short policies never crash classification.
#[test]
fn test_classify_short_policy() {
    let p = VersionBandPartitioner::partition(&["1.27", "1.26", "1.25"]).unwrap();
    assert_eq!(VersionClassifier::classify("1.25", &p).unwrap(), Tier::Previous);
    assert_eq!(VersionClassifier::classify("1.23", &p).unwrap(), Tier::OutOfSupport);
}

/// T1-CLS-05: Observed value is trimmed; matching is exact on the identifier.
#[test]
fn test_classify_exact_match() {
    let p = VersionBandPartitioner::partition(&supported()).unwrap();
    assert_eq!(VersionClassifier::classify(" 1.27 ", &p).unwrap(), Tier::Current);
    assert_eq!(VersionClassifier::classify("1.27.0", &p).unwrap(), Tier::OutOfSupport);
}

/// T1-CLS-06: Duplicate across a band boundary resolves to the newer band.
#[test]
fn test_classify_duplicate_prefers_newer_band() {
    let p = VersionBandPartitioner::partition(&["1.27", "1.26", "1.26", "1.25"]).unwrap();
    assert_eq!(p.previous().to_vec(), vec!["1.26", "1.25"]);
    assert_eq!(VersionClassifier::classify("1.26", &p).unwrap(), Tier::Current);
}

/// T1-PAR-07: Pre-release tags order by identifier, numerically where numeric.
#[test]
fn test_partition_orders_pre_releases() {
    let p = VersionBandPartitioner::partition(&[
        "1.28.0-rc.2",
        "1.27.3",
        "1.28.0-rc.10",
        "1.28.0",
        "1.28.0-beta.1",
    ])
    .unwrap();
    assert_eq!(
        p.sorted_strings(),
        vec!["1.28.0", "1.28.0-rc.10", "1.28.0-rc.2", "1.28.0-beta.1", "1.27.3"]
    );
    assert_eq!(p.current().to_vec(), vec!["1.28.0", "1.28.0-rc.10"]);
}

/// T1-PAR-08: Pre-release identifiers outside [0-9A-Za-z-] are rejected.
#[test]
fn test_partition_rejects_bad_pre_release() {
    for bad in ["1.2-!!!", "1.2-rc..1", "1.2-rc_1"] {
        match VersionBandPartitioner::partition(&["1.27", bad]) {
            Err(ClassificationError::InvalidVersionFormat { value, .. }) => assert_eq!(value, bad),
            other => panic!("Expected InvalidVersionFormat for {bad:?}, got {other:?}"),
        }
    }
}

/// T1-CLS-07: An empty supported list cannot classify anything.
#[test]
fn test_classify_empty_supported_list() {
    let empty: [&str; 0] = [];
    assert_eq!(
        VersionClassifier::evaluate("1.27", &empty),
        Err(ClassificationError::EmptySupportedList)
    );
    let p = VersionBandPartitioner::partition(&empty).unwrap();
    assert_eq!(
        VersionClassifier::classify("1.27", &p),
        Err(ClassificationError::EmptySupportedList)
    );
    // A missing observed version is still reported first.
    assert_eq!(
        VersionClassifier::evaluate("  ", &empty),
        Err(ClassificationError::MissingObservedVersion)
    );
}
