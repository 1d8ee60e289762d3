//! Tests for the snapshot version filter

use std::collections::BTreeMap;
use stubgen::{SnapshotEntry, Version, VersionedSnapshot};

fn snapshot(entries: &[(&str, &str, &str)]) -> VersionedSnapshot {
    let entries: BTreeMap<String, SnapshotEntry> = entries
        .iter()
        .map(|(alias, min, new)| {
            (
                alias.to_string(),
                SnapshotEntry {
                    min: min.to_string(),
                    new: new.to_string(),
                },
            )
        })
        .collect();
    VersionedSnapshot::from_entries(entries)
}

#[test]
fn test_filter_excludes_before_min_version() {
    let snap = snapshot(&[("JFoo", "3.9.0", "Joomla\\CMS\\Foo")]);

    let before = snap.filter_for_version(&Version::parse("3.8.0"));
    assert!(
        before.is_empty(),
        "Target below min must exclude the alias"
    );

    let at = snap.filter_for_version(&Version::parse("3.9.0"));
    assert_eq!(at.len(), 1);
    assert_eq!(at["JFoo"], "Joomla\\CMS\\Foo");

    let after = snap.filter_for_version(&Version::parse("4.0.0"));
    assert_eq!(after.len(), 1, "Included aliases never drop back out");
}

#[test]
fn test_filter_treats_missing_components_as_zero() {
    let snap = snapshot(&[("JFoo", "3.9", "Joomla\\CMS\\Foo")]);

    assert_eq!(
        snap.filter_for_version(&Version::parse("3.9.0")).len(),
        1,
        "min \"3.9\" and target \"3.9.0\" compare equal"
    );
    assert!(snap.filter_for_version(&Version::parse("3.8.99")).is_empty());
}

#[test]
fn test_filter_compares_numerically_not_lexicographically() {
    let snap = snapshot(&[("JFoo", "3.10.0", "Joomla\\CMS\\Foo")]);

    assert!(
        snap.filter_for_version(&Version::parse("3.9.0")).is_empty(),
        "3.10.0 is greater than 3.9.0"
    );
    assert_eq!(snap.filter_for_version(&Version::parse("3.10.0")).len(), 1);
}

#[test]
fn test_filter_is_monotonic_over_the_version_matrix() {
    let snap = snapshot(&[
        ("JFoo", "3.2.0", "Joomla\\CMS\\Foo"),
        ("JBar", "3.9.0", "Joomla\\CMS\\Bar"),
        ("JBaz", "4.0.0", "Joomla\\CMS\\Baz"),
    ]);

    let mut previous: Option<std::collections::BTreeMap<String, String>> = None;
    for major in 3..=4u32 {
        for minor in 0..=99u32 {
            let included = snap.filter_for_version(&Version::parse(&format!("{major}.{minor}.0")));
            if let Some(prev) = &previous {
                assert!(
                    prev.keys().all(|alias| included.contains_key(alias)),
                    "Included aliases must never drop out as the target grows"
                );
            }
            previous = Some(included);
        }
    }

    assert_eq!(snap.filter_for_version(&Version::parse("3.0.0")).len(), 0);
    assert_eq!(snap.filter_for_version(&Version::parse("3.5.0")).len(), 1);
    assert_eq!(snap.filter_for_version(&Version::parse("3.9.0")).len(), 2);
    assert_eq!(snap.filter_for_version(&Version::parse("4.0.0")).len(), 3);
}

#[test]
fn test_filter_is_pure() {
    let snap = snapshot(&[("JFoo", "3.9.0", "Joomla\\CMS\\Foo")]);
    let a = snap.filter_for_version(&Version::parse("3.9.0"));
    let b = snap.filter_for_version(&Version::parse("3.9.0"));
    assert_eq!(a, b);
    assert_eq!(snap.len(), 1, "Filtering must not mutate the snapshot");
}
