//! Property-based tests for filter chain resolution.

use super::layout::{choose_layout, Layout};
use super::resolver::resolve;
use super::token::{FilterKind, FilterToken};
use crate::collection::Collection;
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Steps(Vec<String>);

impl Collection for Steps {
    fn narrow_by_level(&self, level: &str) -> Self {
        let mut steps = self.0.clone();
        steps.push(format!("level:{level}"));
        Self(steps)
    }
    fn narrow_by_topic(&self, topic: &str) -> Self {
        let mut steps = self.0.clone();
        steps.push(format!("topic:{topic}"));
        Self(steps)
    }
    fn narrow_by_search(&self, search: &str) -> Self {
        let mut steps = self.0.clone();
        steps.push(format!("search:{search}"));
        Self(steps)
    }
}

// Strategy for generating filter tokens, including invalid skips and unknown kinds
fn token_strategy() -> impl Strategy<Value = FilterToken> {
    prop_oneof![
        "[0-9]{1,2}".prop_map(|v| FilterToken::new(FilterKind::Level, v)),
        "[A-Za-z]{1,8}".prop_map(|v| FilterToken::new(FilterKind::Topic, v)),
        "[a-z ]{0,8}".prop_map(|v| FilterToken::new(FilterKind::Search, v)),
        (0..500usize).prop_map(|v| FilterToken::new(FilterKind::Skip, v.to_string())),
        "[a-z]{1,4}".prop_map(|v| FilterToken::new(FilterKind::Skip, v)),
        "[a-z]{1,6}".prop_map(|k| FilterToken::new(FilterKind::Unknown(format!("x{k}")), "v")),
    ]
}

fn chain_strategy() -> impl Strategy<Value = Vec<FilterToken>> {
    prop::collection::vec(token_strategy(), 0..10)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Layout depends only on the set of kinds present
    #[test]
    fn layout_is_order_independent(chain in chain_strategy()) {
        let mut reversed = chain.clone();
        reversed.reverse();
        prop_assert_eq!(choose_layout(&chain), choose_layout(&reversed));
    }

    // The resolved layout always matches the standalone decision
    #[test]
    fn resolved_layout_matches_choice(chain in chain_strategy()) {
        let base = Steps(vec![]);
        prop_assert_eq!(resolve(&base, &chain).layout(), choose_layout(&chain));
    }

    // Skip is taken from the last skip token in chain order
    #[test]
    fn skip_is_last_write(chain in chain_strategy()) {
        let base = Steps(vec![]);
        let expected = chain
            .iter()
            .rev()
            .find(|token| token.kind == FilterKind::Skip)
            .map_or(0, |token| token.value.parse::<usize>().unwrap_or(0));
        prop_assert_eq!(resolve(&base, &chain).skip(), expected);
    }

    // Narrowing steps are applied exactly once each, in chain order
    #[test]
    fn narrowing_follows_chain(chain in chain_strategy()) {
        let base = Steps(vec![]);
        let expected: Vec<String> = chain
            .iter()
            .filter(|token| {
                matches!(token.kind, FilterKind::Level | FilterKind::Topic | FilterKind::Search)
            })
            .map(ToString::to_string)
            .collect();
        prop_assert_eq!(&resolve(&base, &chain).current().0, &expected);
    }

    // Flat layout needs both a level and a topic filter
    #[test]
    fn flat_requires_both_axes(chain in chain_strategy()) {
        let has_level = chain.iter().any(|t| t.kind == FilterKind::Level);
        let has_topic = chain.iter().any(|t| t.kind == FilterKind::Topic);
        prop_assert_eq!(choose_layout(&chain) == Layout::Flat, has_level && has_topic);
    }
}
