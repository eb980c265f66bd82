//! Property tests for module URI derivation.

use std::path::PathBuf;

use proptest::prelude::*;

use hubload::domain::value_objects::ModuleUri;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_][A-Za-z0-9_.-]{0,10}")
        .unwrap()
        .prop_filter("not a dot segment", |s| s != "." && s != "..")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the URI is "/" joined with the relative segments.
    #[test]
    fn property_uri_mirrors_relative_path(
        segments in proptest::collection::vec(segment(), 1..6),
    ) {
        let root = PathBuf::from("/proj/plugins");
        let mut path = root.clone();
        for s in &segments {
            path.push(s);
        }

        let uri = ModuleUri::from_relative(&root, &path).unwrap();
        prop_assert_eq!(uri.as_str(), format!("/{}", segments.join("/")));
    }

    /// PROPERTY: paths outside the root never produce a URI.
    #[test]
    fn property_outside_root_has_no_uri(
        segments in proptest::collection::vec(segment(), 1..4),
    ) {
        let mut path = PathBuf::from("/elsewhere");
        for s in &segments {
            path.push(s);
        }
        prop_assert!(ModuleUri::from_relative(&PathBuf::from("/proj/plugins"), &path).is_none());
    }
}
