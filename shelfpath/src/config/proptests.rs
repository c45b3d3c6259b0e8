//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{CollectionDefinition, Config, OutputFormat};
use super::validator::ConfigValidator;
use crate::route::RedirectRule;
use proptest::prelude::*;
use std::collections::HashSet;

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Human),
        Just(OutputFormat::Json),
        Just(OutputFormat::Yaml),
    ]
}

// Keys drawn from a small alphabet so that lists overlap often. Keys are
// unique within one list, as validation requires.
fn collections_strategy() -> impl Strategy<Value = Vec<CollectionDefinition>> {
    prop::collection::btree_map("[a-e]", "[A-Z][a-z]{0,6}", 0..6).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(key, label)| CollectionDefinition::new(key, label))
            .collect()
    })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(collections_strategy()),
        prop::option::of(prop::collection::btree_map("/[a-c]", "/[x-z]", 0..4)),
        prop::option::of(output_format_strategy()),
    )
        .prop_map(|(collections, redirects, output_format)| Config {
            collections,
            redirects: redirects.map(|pairs| {
                pairs
                    .into_iter()
                    .map(|(from, to)| RedirectRule::new(from, to))
                    .collect()
            }),
            embeds: None,
            output_format,
        })
}

fn keys(config: &Config) -> Vec<String> {
    config
        .collections
        .iter()
        .flatten()
        .map(|c| c.url_key.clone())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Higher precedence output format wins when present
    #[test]
    fn config_merge_higher_precedence_wins(
        low in prop::option::of(output_format_strategy()),
        high in prop::option::of(output_format_strategy())
    ) {
        let mut result = Config { output_format: low, ..Default::default() };
        ConfigMerger::merge_into(&mut result, &Config { output_format: high, ..Default::default() });
        prop_assert_eq!(result.output_format, high.or(low));
    }

    // Empty config is identity element for merge
    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Keyed lists end up holding the union of keys, each source entry winning
    #[test]
    fn config_merge_keyed_union(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        let expected: HashSet<String> = keys(&low).into_iter().chain(keys(&high)).collect();
        let actual: HashSet<String> = keys(&merged).into_iter().collect();
        prop_assert_eq!(actual, expected);

        // Overlay entries replace entries with the same key
        for definition in high.collections.iter().flatten() {
            let found = merged
                .collections
                .iter()
                .flatten()
                .find(|c| c.url_key == definition.url_key);
            prop_assert_eq!(found, Some(definition));
        }
    }

    // Merging is associative
    #[test]
    fn config_merge_associative(
        a in config_strategy(),
        b in config_strategy(),
        c in config_strategy()
    ) {
        let mut left = a.clone();
        ConfigMerger::merge_into(&mut left, &b);
        ConfigMerger::merge_into(&mut left, &c);

        let mut b_merge_c = b;
        ConfigMerger::merge_into(&mut b_merge_c, &c);
        let mut right = a;
        ConfigMerger::merge_into(&mut right, &b_merge_c);

        prop_assert_eq!(left, right);
    }

    // Keys made of ordinary segment characters always validate
    #[test]
    fn plain_url_keys_validate(key in "[a-z][a-z0-9.-]{0,20}") {
        prop_assume!(key != "read");
        let config = Config {
            collections: Some(vec![CollectionDefinition::new(key, "Label")]),
            ..Default::default()
        };
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    // Any key containing a separator is rejected
    #[test]
    fn nested_url_keys_rejected(a in "[a-z]{1,5}", b in "[a-z]{0,5}") {
        let config = Config {
            collections: Some(vec![CollectionDefinition::new(format!("{a}/{b}"), "Label")]),
            ..Default::default()
        };
        prop_assert!(ConfigValidator::validate(&config).is_err());
    }
}
