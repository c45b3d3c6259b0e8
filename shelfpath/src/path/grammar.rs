//! The collection-path grammar.
//!
//! A path is a `/`-delimited sequence of segments. A segment whose first
//! character is `:` is a filter segment; any other segment is a name
//! segment. The rightmost name segment is the collection; filter segments
//! after it narrow that collection, and name segments before it are the
//! breadcrumb trail that led there.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marks a segment as a filter segment.
pub const MARKER: char = ':';

/// Separates path segments.
pub const SEPARATOR: char = '/';

/// The collection used when a path names no collection of its own.
pub const ROOT_COLLECTION: &str = "root.read";

/// Reserved segment that is an alias for [`ROOT_COLLECTION`].
pub const READ_COLLECTION: &str = "read";

/// One segment of a path.
///
/// # Examples
///
/// ```
/// use shelfpath::path::PathToken;
///
/// assert!(PathToken::new(":level:1").is_filter());
/// assert_eq!(PathToken::new(":level:1").filter_body(), Some("level:1"));
/// assert!(!PathToken::new("ew-nigeria").is_filter());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathToken<'a> {
    raw: &'a str,
}

impl<'a> PathToken<'a> {
    /// Wrap a raw segment.
    #[must_use]
    pub const fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// The segment exactly as it appeared in the path.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Whether this segment starts with the filter marker.
    #[must_use]
    pub fn is_filter(&self) -> bool {
        self.raw.starts_with(MARKER)
    }

    /// The segment with its marker removed, if it is a filter segment.
    #[must_use]
    pub fn filter_body(&self) -> Option<&'a str> {
        self.raw.strip_prefix(MARKER)
    }
}

/// Split a path into segments after stripping all leading separators.
///
/// An empty path yields a single empty segment.
///
/// # Examples
///
/// ```
/// use shelfpath::path::grammar::tokenize;
///
/// let tokens = tokenize("//a/:level:1");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].as_str(), "a");
/// assert_eq!(tokenize("").len(), 1);
/// ```
#[must_use]
pub fn tokenize(path: &str) -> Vec<PathToken<'_>> {
    path.trim_start_matches(SEPARATOR)
        .split(SEPARATOR)
        .map(PathToken::new)
        .collect()
}

/// A path broken into breadcrumbs, collection name and filters.
///
/// # Examples
///
/// ```
/// use shelfpath::path::ParsedPath;
///
/// let parsed = ParsedPath::parse("/enabling-writers/ew-nigeria/:level:1/:topic:Agriculture");
/// assert_eq!(parsed.collection_name, "ew-nigeria");
/// assert_eq!(parsed.breadcrumbs, vec!["enabling-writers"]);
/// assert_eq!(parsed.filters, vec!["level:1", "topic:Agriculture"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedPath {
    /// The rightmost name segment, or [`ROOT_COLLECTION`].
    pub collection_name: String,
    /// Filter segments after the collection, marker stripped, in path order.
    pub filters: Vec<String>,
    /// Segments before the collection, in path order.
    pub breadcrumbs: Vec<String>,
}

impl ParsedPath {
    /// Parse a path. `None` is treated as the empty path.
    ///
    /// Parsing never fails. Paths that name no usable collection (empty,
    /// only filters, or a collection segment of `read`) resolve to
    /// [`ROOT_COLLECTION`].
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfpath::path::{ParsedPath, ROOT_COLLECTION};
    ///
    /// assert_eq!(ParsedPath::parse(None).collection_name, ROOT_COLLECTION);
    /// assert_eq!(ParsedPath::parse("read").collection_name, ROOT_COLLECTION);
    ///
    /// let only_filters = ParsedPath::parse(":level:1");
    /// assert_eq!(only_filters.collection_name, ROOT_COLLECTION);
    /// assert_eq!(only_filters.filters, vec!["level:1"]);
    /// ```
    #[must_use]
    pub fn parse<'a>(path: impl Into<Option<&'a str>>) -> Self {
        let tokens = tokenize(path.into().unwrap_or_default());
        let name_index = tokens.iter().rposition(|token| !token.is_filter());

        let collection_name = name_index
            .map(|index| tokens[index].as_str())
            .filter(|name| !name.is_empty() && *name != READ_COLLECTION)
            .unwrap_or(ROOT_COLLECTION)
            .to_string();

        let filter_start = name_index.map_or(0, |index| index + 1);
        let filters = tokens[filter_start..]
            .iter()
            .map(|token| token.filter_body().unwrap_or(token.as_str()).to_string())
            .collect();

        let breadcrumbs = tokens[..name_index.unwrap_or(0)]
            .iter()
            .map(|token| token.as_str().to_string())
            .collect();

        Self {
            collection_name,
            filters,
            breadcrumbs,
        }
    }

    /// Whether the path resolved to the root collection.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.collection_name == ROOT_COLLECTION
    }

    /// Rebuild the path string, without a leading separator.
    #[must_use]
    pub fn to_path(&self) -> String {
        compose(&self.breadcrumbs, &self.collection_name, &self.filters)
    }
}

impl fmt::Display for ParsedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// Parse a path. Shorthand for [`ParsedPath::parse`].
#[must_use]
pub fn parse<'a>(path: impl Into<Option<&'a str>>) -> ParsedPath {
    ParsedPath::parse(path)
}

/// Join breadcrumbs, a collection name and filters into a path.
///
/// Filters are given without their marker and are re-prefixed with it.
/// For any collection name other than the empty string, `read` and
/// `root.read`, and breadcrumbs that are not filter segments,
/// `parse(compose(b, c, f))` yields `(b, c, f)` again.
///
/// # Examples
///
/// ```
/// use shelfpath::path::{compose, parse};
///
/// let path = compose(&["enabling-writers"], "ew-nigeria", &["level:1"]);
/// assert_eq!(path, "enabling-writers/ew-nigeria/:level:1");
///
/// let parsed = parse(path.as_str());
/// assert_eq!(parsed.breadcrumbs, vec!["enabling-writers"]);
/// assert_eq!(parsed.collection_name, "ew-nigeria");
/// assert_eq!(parsed.filters, vec!["level:1"]);
/// ```
#[must_use]
pub fn compose<B, F>(breadcrumbs: &[B], collection_name: &str, filters: &[F]) -> String
where
    B: AsRef<str>,
    F: AsRef<str>,
{
    let mut segments: Vec<String> = Vec::with_capacity(breadcrumbs.len() + filters.len() + 1);
    segments.extend(breadcrumbs.iter().map(|b| b.as_ref().to_string()));
    segments.push(collection_name.to_string());
    segments.extend(filters.iter().map(|f| format!("{MARKER}{}", f.as_ref())));
    segments.join(&SEPARATOR.to_string())
}
