//! Property-based tests for path parsing and composition.

use super::composer::compose_target_path;
use super::grammar::{compose, parse, MARKER, READ_COLLECTION, ROOT_COLLECTION};
use proptest::prelude::*;

// Strategy for generating name segments
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_.-]{1,20}".prop_filter("reserved collection names", |name| {
        name != READ_COLLECTION && name != ROOT_COLLECTION
    })
}

// Strategy for generating marker-free filter bodies like `level:1`
fn filter_strategy() -> impl Strategy<Value = String> {
    ("(level|topic|search|skip|[a-z]{1,6})", "[A-Za-z0-9 _-]{0,12}")
        .prop_map(|(kind, value)| format!("{kind}:{value}"))
}

fn breadcrumbs_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(name_strategy(), 0..6)
}

fn filters_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(filter_strategy(), 0..6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // parse(compose(b, c, f)) == (b, c, f)
    #[test]
    fn compose_parse_round_trip(
        breadcrumbs in breadcrumbs_strategy(),
        name in name_strategy(),
        filters in filters_strategy(),
    ) {
        let parsed = parse(compose(&breadcrumbs, &name, &filters).as_str());
        prop_assert_eq!(parsed.breadcrumbs, breadcrumbs);
        prop_assert_eq!(parsed.collection_name, name);
        prop_assert_eq!(parsed.filters, filters);
    }

    // Parsing is total and its output is well formed
    #[test]
    fn parse_is_total(path in ".{0,80}") {
        let parsed = parse(path.as_str());
        prop_assert!(!parsed.collection_name.is_empty());
        prop_assert!(parsed.collection_name != READ_COLLECTION);
        prop_assert!(!parsed.collection_name.starts_with(MARKER));
    }

    // Leading separators never change the parse
    #[test]
    fn leading_separators_ignored(path in "[a-z:/]{0,40}", slashes in 0..4usize) {
        let prefixed = format!("{}{path}", "/".repeat(slashes));
        prop_assert_eq!(parse(prefixed.as_str()), parse(path.as_str()));
    }

    // Re-composing a parse reproduces the normalized input unless the sentinel fired
    #[test]
    fn parse_compose_reproduces_input(
        breadcrumbs in breadcrumbs_strategy(),
        name in name_strategy(),
        filters in filters_strategy(),
    ) {
        let path = format!("/{}", compose(&breadcrumbs, &name, &filters));
        prop_assert_eq!(parse(path.as_str()).to_path(), path.trim_start_matches('/'));
    }

    // A composed target always ends with the target fragment
    #[test]
    fn target_path_ends_with_target(
        breadcrumbs in breadcrumbs_strategy(),
        name in name_strategy(),
        target in name_strategy(),
    ) {
        let current = compose(&breadcrumbs, &name, &Vec::<String>::new());
        let next = compose_target_path(&current, &target);
        prop_assert!(next.ends_with(&target));
        prop_assert!(!next.starts_with('/'));
    }

    // Filtering the current collection never duplicates it
    #[test]
    fn target_path_same_collection_not_repeated(
        breadcrumbs in breadcrumbs_strategy(),
        name in name_strategy(),
        filters in filters_strategy(),
    ) {
        let current = compose(&breadcrumbs, &name, &Vec::<String>::new());
        let target = compose(&Vec::<String>::new(), &name, &filters);
        let next = compose_target_path(&current, &target);
        prop_assert_eq!(next, compose(&breadcrumbs, &name, &filters));
    }
}
