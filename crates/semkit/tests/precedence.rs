/// Integration tests for parsing and precedence
///
/// Property tests check the round-trip and total-order guarantees over
/// generated versions.

use std::cmp::Ordering;

use proptest::prelude::*;
use semkit::{Semver, SemverError, VersionInfo, VersionParser, SEMVER_SPEC_VERSION};

fn number() -> impl Strategy<Value = String> {
    prop_oneof![Just("0".to_string()), "[1-9][0-9]{0,5}"]
}

fn identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("0".to_string()),
        "[1-9][0-9]{0,3}",
        "[0-9]{0,2}[A-Za-z-][0-9A-Za-z-]{0,4}",
    ]
}

fn identifiers() -> impl Strategy<Value = String> {
    prop::collection::vec(identifier(), 1..4).prop_map(|ids| ids.join("."))
}

fn version_string() -> impl Strategy<Value = String> {
    (
        number(),
        number(),
        number(),
        prop::option::of(identifiers()),
        prop::option::of(identifiers()),
    )
        .prop_map(|(major, minor, patch, pre, build)| {
            let mut s = format!("{}.{}.{}", major, minor, patch);
            if let Some(pre) = pre {
                s.push('-');
                s.push_str(&pre);
            }
            if let Some(build) = build {
                s.push('+');
                s.push_str(&build);
            }
            s
        })
}

proptest! {
    #[test]
    fn render_inverts_parse(s in version_string()) {
        let parsed = VersionInfo::parse(&s).unwrap();
        prop_assert_eq!(parsed.to_string(), s);
    }

    #[test]
    fn parse_inverts_render(s in version_string()) {
        let parsed = VersionInfo::parse(&s).unwrap();
        let again = VersionInfo::parse(&parsed.to_string()).unwrap();
        prop_assert!(again.identical_to(&parsed));
    }

    #[test]
    fn exactly_one_relation_holds(a in version_string(), b in version_string()) {
        let a = VersionInfo::parse(&a).unwrap();
        let b = VersionInfo::parse(&b).unwrap();
        let relations = [a < b, a == b, a > b];
        prop_assert_eq!(relations.iter().filter(|r| **r).count(), 1);
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn ordering_is_transitive(a in version_string(), b in version_string(), c in version_string()) {
        let mut list = vec![
            VersionInfo::parse(&a).unwrap(),
            VersionInfo::parse(&b).unwrap(),
            VersionInfo::parse(&c).unwrap(),
        ];
        list.sort();
        prop_assert!(list[0] <= list[1]);
        prop_assert!(list[1] <= list[2]);
        prop_assert!(list[0] <= list[2]);
    }

    #[test]
    fn build_metadata_never_orders(s in version_string(), build in identifiers()) {
        let base = VersionInfo::parse(&s).unwrap();
        let rebuilt = base.replace([("build", build.as_str())]).unwrap();
        prop_assert_eq!(base.cmp(&rebuilt), Ordering::Equal);
    }

    #[test]
    fn bumps_always_move_forward(s in version_string()) {
        let v = VersionInfo::parse(&s).unwrap();
        prop_assert!(v.bump_major().unwrap() > v);
        prop_assert!(v.bump_minor().unwrap() > v);
        prop_assert!(v.bump_patch().unwrap() > v);
        prop_assert!(v.finalize() >= v);
    }

    #[test]
    fn leading_zero_core_rejected(n in "[1-9][0-9]{0,4}") {
        let s = format!("1.0{}.0", n);
        prop_assert!(!VersionParser::is_valid(&s));
    }
}

#[test]
fn test_spec_version() {
    assert_eq!(SEMVER_SPEC_VERSION, "2.0.0");
}

#[test]
fn test_precedence_example() {
    let ordered = [
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
    ];
    let mut shuffled: Vec<&str> = ordered.iter().rev().copied().collect();
    shuffled.swap(1, 5);
    assert_eq!(Semver::sort(&shuffled), ordered);
}

#[test]
fn test_invalid_inputs() {
    for input in ["1.2", "1.02.3", "1.2.3-", "v1.2.3", "1.2.3+"] {
        assert_eq!(
            VersionInfo::parse(input),
            Err(SemverError::MalformedVersion(input.to_string()))
        );
    }
}

#[test]
fn test_versions_are_shareable_across_threads() {
    let v = std::sync::Arc::new(VersionInfo::parse("1.2.3-rc.1").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let v = v.clone();
            std::thread::spawn(move || v.bump_prerelease("rc").unwrap().to_string() + &i.to_string())
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), format!("1.2.3-rc.2{}", i));
    }
}
