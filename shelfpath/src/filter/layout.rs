//! Choosing how a narrowed collection is displayed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::token::{FilterKind, FilterToken};

/// How the books of a collection are grouped on the page.
///
/// # Examples
///
/// ```
/// use shelfpath::filter::Layout;
///
/// assert_eq!(Layout::default(), Layout::ByLevel);
/// assert_eq!(Layout::ByTopic.to_string(), "by-topic");
/// assert_eq!("flat".parse::<Layout>().unwrap(), Layout::Flat);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// One group per reading level.
    #[default]
    ByLevel,
    /// One group per topic.
    ByTopic,
    /// A single paginated list.
    Flat,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByLevel => write!(f, "by-level"),
            Self::ByTopic => write!(f, "by-topic"),
            Self::Flat => write!(f, "flat"),
        }
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "by-level" => Ok(Self::ByLevel),
            "by-topic" => Ok(Self::ByTopic),
            "flat" => Ok(Self::Flat),
            _ => Err(format!("invalid layout: {s}")),
        }
    }
}

/// Pick the layout for a filter chain.
///
/// Never subdivides along an axis a filter already fixed: without a level
/// filter the books are grouped by level, with only a level filter they are
/// grouped by topic, and with both they form a flat list. Only the set of
/// kinds present matters, not their order.
///
/// Any layout preference a collection declares is not consulted.
///
/// # Examples
///
/// ```
/// use shelfpath::filter::{choose_layout, parse_chain, Layout};
///
/// assert_eq!(choose_layout(&[]), Layout::ByLevel);
/// assert_eq!(choose_layout(&parse_chain(&["level:1"])), Layout::ByTopic);
/// assert_eq!(choose_layout(&parse_chain(&["topic:x", "level:1"])), Layout::Flat);
/// ```
#[must_use]
pub fn choose_layout(chain: &[FilterToken]) -> Layout {
    let has = |kind: FilterKind| chain.iter().any(|token| token.kind == kind);
    if !has(FilterKind::Level) {
        Layout::ByLevel
    } else if !has(FilterKind::Topic) {
        Layout::ByTopic
    } else {
        Layout::Flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::token::parse_chain;

    #[test]
    fn test_empty_chain_by_level() {
        assert_eq!(choose_layout(&[]), Layout::ByLevel);
    }

    #[test]
    fn test_level_only_by_topic() {
        assert_eq!(choose_layout(&parse_chain(&["level:1"])), Layout::ByTopic);
    }

    #[test]
    fn test_level_and_topic_flat() {
        assert_eq!(
            choose_layout(&parse_chain(&["level:1", "topic:Agriculture"])),
            Layout::Flat
        );
    }

    #[test]
    fn test_topic_without_level_by_level() {
        assert_eq!(choose_layout(&parse_chain(&["topic:x"])), Layout::ByLevel);
    }

    #[test]
    fn test_other_kinds_do_not_matter() {
        assert_eq!(
            choose_layout(&parse_chain(&["search:dogs", "skip:10", "shelf:x"])),
            Layout::ByLevel
        );
        assert_eq!(
            choose_layout(&parse_chain(&["search:dogs", "level:2"])),
            Layout::ByTopic
        );
    }

    #[test]
    fn test_order_independent() {
        assert_eq!(
            choose_layout(&parse_chain(&["topic:x", "level:1"])),
            choose_layout(&parse_chain(&["level:1", "topic:x"]))
        );
    }

    #[test]
    fn test_layout_serde() {
        assert_eq!(serde_json::to_string(&Layout::ByLevel).unwrap(), "\"by-level\"");
        let parsed: Layout = serde_json::from_str("\"by-topic\"").unwrap();
        assert_eq!(parsed, Layout::ByTopic);
    }

    #[test]
    fn test_layout_from_str_invalid() {
        assert!("by-language".parse::<Layout>().is_err());
    }
}
