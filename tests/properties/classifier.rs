//! Property tests for directory classification.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use hubload::{classify, DirectoryRole, ProjectLayout, Target};

/// Segment names that are never routing keywords
fn plain_segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,8}")
        .unwrap()
        .prop_filter("not a keyword", |s| {
            !matches!(s.as_str(), "REST" | "input" | "harmonize")
        })
}

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => plain_segment(),
        1 => Just("input".to_string()),
        1 => Just("harmonize".to_string()),
        1 => Just("REST".to_string()),
    ]
}

fn entities_root() -> PathBuf {
    PathBuf::from("/proj/plugins/entities")
}

fn under_root(segments: &[String]) -> PathBuf {
    let mut path = entities_root();
    for s in segments {
        path.push(s);
    }
    path
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a directory not named REST never routes to a target.
    #[test]
    fn property_only_rest_directories_route(
        segments in proptest::collection::vec(segment(), 1..6)
            .prop_filter("last is not REST", |s| s.last().map(String::as_str) != Some("REST")),
    ) {
        let role = classify(&under_root(&segments), &entities_root());
        prop_assert_eq!(role.target(), None);
        prop_assert!(!role.is_terminal());
    }

    /// PROPERTY: an input segment anywhere above REST routes to staging.
    #[test]
    fn property_input_wins_over_harmonize(
        before in proptest::collection::vec(segment(), 0..3),
        after in proptest::collection::vec(segment(), 0..3),
    ) {
        let mut segments = before;
        segments.push("input".to_string());
        segments.extend(after);
        segments.push("REST".to_string());

        let role = classify(&under_root(&segments), &entities_root());
        prop_assert_eq!(role, DirectoryRole::RestInput);
        prop_assert_eq!(role.target(), Some(Target::Staging));
    }

    /// PROPERTY: REST with only plain ancestors is never routed, and the
    /// walk does not descend below it.
    #[test]
    fn property_unrouted_rest_is_terminal(
        segments in proptest::collection::vec(plain_segment(), 0..5),
    ) {
        let mut segments = segments;
        segments.push("REST".to_string());

        let role = classify(&under_root(&segments), &entities_root());
        prop_assert_eq!(role, DirectoryRole::UnroutedRest);
        prop_assert!(role.is_terminal());
    }

    /// PROPERTY: segments outside the entities root never affect routing.
    #[test]
    fn property_prefix_outside_root_is_ignored(
        prefix in proptest::collection::vec(segment(), 0..4),
        name in plain_segment(),
    ) {
        let mut root = PathBuf::from("/");
        for s in &prefix {
            root.push(s);
        }
        root.push("entities");
        let rest = root.join(&name).join("REST");

        prop_assert_eq!(classify(&rest, &root), DirectoryRole::UnroutedRest);
        prop_assert_eq!(classify(&root.join(&name), &root), DirectoryRole::EntityDefinitionsLeaf);
    }

    /// PROPERTY: files owned by the walk are exactly the files in entity
    /// leaves and below a routed REST directory.
    #[test]
    fn property_walk_ownership_matches_roles(
        segments in proptest::collection::vec(segment(), 1..6),
        file in plain_segment(),
    ) {
        let layout = ProjectLayout::new("/proj", "plugins", "entities");
        let dir = under_root(&segments);
        let owned = layout.is_walk_owned(&dir.join(format!("{}.sjs", file)));

        let mut routed_rest = false;
        let mut current = entities_root();
        for s in &segments {
            current.push(s);
            if s == "REST" {
                routed_rest = classify(&current, &entities_root()).target().is_some();
                break;
            }
        }
        let in_leaf = segments.len() == 1 && segments[0] != "REST";
        let first_is_rest_leaf = segments.len() == 1 && segments[0] == "REST";

        if first_is_rest_leaf {
            prop_assert!(!owned);
        } else {
            prop_assert_eq!(owned, routed_rest || in_leaf);
        }
    }
}

#[test]
fn rest_directly_under_entities_root_is_unrouted() {
    let root = Path::new("/proj/plugins/entities");
    assert_eq!(classify(&root.join("REST"), root), DirectoryRole::UnroutedRest);
}
