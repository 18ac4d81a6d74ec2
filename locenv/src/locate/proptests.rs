//! Property-based tests for candidate parsing and the upward walk.

use super::{candidate_profile, next_level, Candidate, DEFAULT_PREFIX};
use proptest::prelude::*;
use std::path::{Path, PathBuf};

// Strategy for path components that never contain a separator
fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,12}".prop_filter("not a dot component", |s| s != "." && s != "..")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // The encoded profile is exactly the text after the prefix
    #[test]
    fn profile_roundtrips_through_file_name(profile in "[a-zA-Z0-9_.-]{0,20}") {
        let name = format!("{DEFAULT_PREFIX}{profile}");
        prop_assert_eq!(candidate_profile(&name, DEFAULT_PREFIX), Some(profile.as_str()));

        let candidate = Candidate::from_path(Path::new(&name), DEFAULT_PREFIX).unwrap();
        prop_assert!(candidate.matches(&profile));
    }

    // Names without the prefix are never candidates
    #[test]
    fn names_without_prefix_rejected(name in "[a-zA-Z0-9_-][a-zA-Z0-9_.-]{0,20}") {
        prop_assert!(candidate_profile(&name, DEFAULT_PREFIX).is_none());
    }

    // Matching is case-sensitive: a profile with letters never matches its uppercase form
    #[test]
    fn matching_is_case_sensitive(profile in "[a-z]{1,12}") {
        let candidate = Candidate::from_path(
            Path::new(&format!("{DEFAULT_PREFIX}{profile}")),
            DEFAULT_PREFIX,
        ).unwrap();
        prop_assert!(!candidate.matches(&profile.to_uppercase()));
    }

    // The upward walk visits at most one level per path component and never the root
    #[test]
    fn upward_walk_terminates(components in prop::collection::vec(component_strategy(), 1..10)) {
        let mut start = PathBuf::from(std::path::MAIN_SEPARATOR.to_string());
        for component in &components {
            start.push(component);
        }

        let mut levels = vec![start.as_path()];
        let mut current = start.as_path();
        while let Some(parent) = next_level(current) {
            prop_assert!(parent.parent().is_some(), "root must not be scanned");
            levels.push(parent);
            current = parent;
            prop_assert!(levels.len() <= components.len());
        }

        prop_assert_eq!(levels.len(), components.len());
    }

    // Relative start paths stop once they run out of components
    #[test]
    fn relative_walk_terminates(components in prop::collection::vec(component_strategy(), 1..10)) {
        let start: PathBuf = components.iter().collect();

        let mut count = 1;
        let mut current = start.as_path();
        while let Some(parent) = next_level(current) {
            prop_assert!(!parent.as_os_str().is_empty());
            count += 1;
            current = parent;
        }

        prop_assert_eq!(count, components.len());
    }
}
