//! Typed filter tokens.

use std::fmt;

use crate::error::{Error, Result};

/// Separates a filter's kind from its value.
const KIND_SEPARATOR: char = ':';

/// The kind of a filter token.
///
/// Kinds this library does not know are kept as [`FilterKind::Unknown`] so
/// that newer paths still parse.
///
/// # Examples
///
/// ```
/// use shelfpath::filter::FilterKind;
///
/// assert_eq!(FilterKind::parse("level"), FilterKind::Level);
/// assert_eq!(FilterKind::parse("language"), FilterKind::Unknown("language".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Narrow to a reading level.
    Level,
    /// Narrow to a topic.
    Topic,
    /// Narrow by free-text search.
    Search,
    /// Page offset into a flat listing.
    Skip,
    /// Any other kind.
    Unknown(String),
}

impl FilterKind {
    /// Parse a kind name. Matching is exact.
    #[must_use]
    pub fn parse(kind: &str) -> Self {
        match kind {
            "level" => Self::Level,
            "topic" => Self::Topic,
            "search" => Self::Search,
            "skip" => Self::Skip,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The kind name as it appears in a path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Level => "level",
            Self::Topic => "topic",
            Self::Search => "search",
            Self::Skip => "skip",
            Self::Unknown(kind) => kind,
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `kind:value` filter.
///
/// # Examples
///
/// ```
/// use shelfpath::filter::{FilterKind, FilterToken};
///
/// let token = FilterToken::parse("topic:Agriculture");
/// assert_eq!(token.kind, FilterKind::Topic);
/// assert_eq!(token.value, "Agriculture");
/// assert_eq!(token.to_string(), "topic:Agriculture");
///
/// // Only the first separator splits kind from value.
/// assert_eq!(FilterToken::parse("search:a:b").value, "a:b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterToken {
    /// What the filter does.
    pub kind: FilterKind,
    /// The filter's argument, opaque except for `skip`.
    pub value: String,
}

impl FilterToken {
    /// Create a token from its parts.
    #[must_use]
    pub fn new(kind: FilterKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Parse a marker-stripped filter segment such as `level:1`.
    ///
    /// A segment without a separator is a kind with an empty value.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        let (kind, value) = body.split_once(KIND_SEPARATOR).unwrap_or((body, ""));
        Self::new(FilterKind::parse(kind), value)
    }

    /// Interpret the value as a page offset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFilterValue`] if the value is not a
    /// non-negative integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfpath::filter::FilterToken;
    ///
    /// assert_eq!(FilterToken::parse("skip:20").skip_value().unwrap(), 20);
    /// assert!(FilterToken::parse("skip:abc").skip_value().is_err());
    /// assert!(FilterToken::parse("skip:-1").skip_value().is_err());
    /// ```
    pub fn skip_value(&self) -> Result<usize> {
        let invalid = |reason: String| Error::InvalidFilterValue {
            kind: self.kind.to_string(),
            value: self.value.clone(),
            reason,
        };

        // `usize::from_str` accepts a leading sign; a path offset never carries one
        if self.value.starts_with('+') {
            return Err(invalid("expected a non-negative integer without a sign".to_string()));
        }
        self.value
            .parse::<usize>()
            .map_err(|err| invalid(format!("expected a non-negative integer ({err})")))
    }
}

impl fmt::Display for FilterToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, self.value.as_str()) {
            // A body without a separator parses to an unknown kind with no value
            (FilterKind::Unknown(kind), "") => f.write_str(kind),
            (kind, value) => write!(f, "{kind}{KIND_SEPARATOR}{value}"),
        }
    }
}

impl From<&str> for FilterToken {
    fn from(body: &str) -> Self {
        Self::parse(body)
    }
}

/// Parse the filters of a path into tokens, keeping their order.
///
/// # Examples
///
/// ```
/// use shelfpath::filter::{parse_chain, FilterKind};
/// use shelfpath::path::parse;
///
/// let parsed = parse("ew-nigeria/:level:1/:search:dogs");
/// let chain = parse_chain(&parsed.filters);
/// assert_eq!(chain[0].kind, FilterKind::Level);
/// assert_eq!(chain[1].kind, FilterKind::Search);
/// ```
#[must_use]
pub fn parse_chain<S: AsRef<str>>(filters: &[S]) -> Vec<FilterToken> {
    filters
        .iter()
        .map(|filter| FilterToken::parse(filter.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!(FilterToken::parse("level:1").kind, FilterKind::Level);
        assert_eq!(FilterToken::parse("topic:x").kind, FilterKind::Topic);
        assert_eq!(FilterToken::parse("search:dogs").kind, FilterKind::Search);
        assert_eq!(FilterToken::parse("skip:5").kind, FilterKind::Skip);
    }

    #[test]
    fn test_parse_unknown_kind() {
        let token = FilterToken::parse("language:en");
        assert_eq!(token.kind, FilterKind::Unknown("language".to_string()));
        assert_eq!(token.value, "en");
    }

    #[test]
    fn test_kind_is_case_sensitive() {
        assert_eq!(
            FilterToken::parse("Level:1").kind,
            FilterKind::Unknown("Level".to_string())
        );
    }

    #[test]
    fn test_parse_without_separator() {
        let token = FilterToken::parse("bookshelf");
        assert_eq!(token.kind, FilterKind::Unknown("bookshelf".to_string()));
        assert_eq!(token.value, "");
    }

    #[test]
    fn test_parse_empty_value() {
        let token = FilterToken::parse("search:");
        assert_eq!(token.kind, FilterKind::Search);
        assert_eq!(token.value, "");
    }

    #[test]
    fn test_skip_value() {
        assert_eq!(FilterToken::parse("skip:0").skip_value().unwrap(), 0);
        assert_eq!(FilterToken::parse("skip:120").skip_value().unwrap(), 120);
    }

    #[test]
    fn test_skip_value_invalid() {
        for value in ["abc", "", "-5", "1.5", "10abc", " 7 ", "+5"] {
            let token = FilterToken::new(FilterKind::Skip, value);
            match token.skip_value() {
                Err(Error::InvalidFilterValue { kind, value: v, .. }) => {
                    assert_eq!(kind, "skip");
                    assert_eq!(v, value);
                }
                other => panic!("expected InvalidFilterValue for {value:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_display_round_trip() {
        for body in ["level:1", "topic:Agriculture", "search:a:b", "custom:v", "bookshelf"] {
            assert_eq!(FilterToken::parse(body).to_string(), body);
        }
    }

    #[test]
    fn test_display_reparses_to_same_token() {
        for body in ["bookshelf", "bookshelf:", "level", "search:"] {
            let token = FilterToken::parse(body);
            assert_eq!(FilterToken::parse(&token.to_string()), token);
        }
    }

    #[test]
    fn test_parse_chain_keeps_order() {
        let chain = parse_chain(&["topic:x", "level:1", "skip:3"]);
        let kinds: Vec<_> = chain.iter().map(|t| t.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![FilterKind::Topic, FilterKind::Level, FilterKind::Skip]
        );
    }
}
