use once_cell::sync::Lazy;
use optional::{Optional, OptionalStrict};

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[derive(Debug)]
struct EqCase {
    name: &'static str,
    left: Optional<&'static str>,
    right: Optional<&'static str>,
    equal: bool,
}

static EQ_CASES: Lazy<Vec<EqCase>> = Lazy::new(|| {
    vec![
        EqCase {
            name: "same payload",
            left: Optional::of(Some("1")),
            right: Optional::of(Some("1")),
            equal: true,
        },
        EqCase {
            name: "different payloads",
            left: Optional::of(Some("1")),
            right: Optional::of(Some("2")),
            equal: false,
        },
        EqCase {
            name: "both empty",
            left: Optional::empty(),
            right: Optional::empty(),
            equal: true,
        },
        EqCase {
            name: "collapsed absent payload equals empty",
            left: Optional::of(None),
            right: Optional::empty(),
            equal: true,
        },
        EqCase {
            name: "present default payload is not empty",
            left: Optional::of(Some("")),
            right: Optional::empty(),
            equal: false,
        },
        EqCase {
            name: "present is not empty",
            left: Optional::of(Some("1")),
            right: Optional::empty(),
            equal: false,
        },
    ]
});

#[test]
fn equality_follows_the_table() {
    for case in EQ_CASES.iter() {
        assert_eq!(case.left == case.right, case.equal, "case `{}`", case.name);
        assert_eq!(case.right == case.left, case.equal, "case `{}` reversed", case.name);
        // The operators stay negations of each other.
        assert_eq!(case.left != case.right, !case.equal, "case `{}` negated", case.name);
    }
}

#[test]
fn equal_rows_hash_alike() {
    for case in EQ_CASES.iter().filter(|case| case.equal) {
        assert_eq!(
            hash_of(&case.left),
            hash_of(&case.right),
            "case `{}`",
            case.name
        );
    }
}

#[derive(Debug)]
struct ProjectionCase {
    name: &'static str,
    container: Optional<&'static str>,
    display: &'static str,
    debug: &'static str,
}

static PROJECTION_CASES: Lazy<Vec<ProjectionCase>> = Lazy::new(|| {
    vec![
        ProjectionCase {
            name: "empty",
            container: Optional::empty(),
            display: "",
            debug: "HasValue: False, Value: ",
        },
        ProjectionCase {
            name: "collapsed absent payload",
            container: Optional::of(None),
            display: "",
            debug: "HasValue: False, Value: ",
        },
        ProjectionCase {
            name: "present",
            container: Optional::of(Some("test")),
            display: "test",
            debug: "HasValue: True, Value: test",
        },
    ]
});

#[test]
fn projections_follow_the_table() {
    for case in PROJECTION_CASES.iter() {
        assert_eq!(case.container.to_string(), case.display, "case `{}`", case.name);
        assert_eq!(
            case.container.to_debug_string(),
            case.debug,
            "case `{}`",
            case.name
        );
    }
}

#[test]
fn strict_containers_agree_with_the_table() {
    // Same rows, rebuilt through the strict constructor; the two variants
    // must render identically.
    for case in PROJECTION_CASES.iter() {
        let projected: Option<&str> = case.container.into();
        let strict: OptionalStrict<&str> = match projected {
            Some(value) => OptionalStrict::of(Some(value)).unwrap(),
            None => OptionalStrict::empty(),
        };
        assert_eq!(strict.to_string(), case.display, "case `{}`", case.name);
        assert_eq!(strict.to_debug_string(), case.debug, "case `{}`", case.name);
        assert_eq!(
            strict.has_value(),
            case.container.has_value(),
            "case `{}`",
            case.name
        );
    }
}
