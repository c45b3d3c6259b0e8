//! The site route table.
//!
//! Maps a browser path to the kind of page that should render it. Most
//! paths are collection paths and go through the grammar; a handful of
//! fixed prefixes (books, the player, static pages, aliases) are matched
//! first. Prefixes match whole segments, so `/bulk` matches `/bulk/x` but
//! not `/bulky`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::path::{ParsedPath, SEPARATOR};

/// A path alias that sends one prefix to another location.
///
/// # Examples
///
/// ```
/// use shelfpath::route::RedirectRule;
///
/// let rule = RedirectRule::new("/browse", "/create");
/// assert_eq!(rule.to, "/create");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RedirectRule {
    /// Path prefix that triggers the redirect.
    pub from: String,
    /// Where to send the browser.
    pub to: String,
}

impl RedirectRule {
    /// Create a redirect rule.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The aliases every site has unless configured otherwise.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("/browse", "/create"),
            Self::new("/downloads", "/page/create/downloads"),
            Self::new("/installers", "/page/create/downloads"),
        ]
    }
}

/// The page a path leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Route {
    /// Send the browser elsewhere.
    Redirect {
        /// The new location.
        to: String,
    },
    /// Preview of a CMS banner.
    BannerPreview {
        /// The banner id.
        id: String,
    },
    /// A book's detail page.
    Book {
        /// The collections the book was reached through.
        breadcrumbs: Vec<String>,
        /// The book id.
        id: String,
    },
    /// The book reader.
    Player {
        /// The book id.
        id: String,
    },
    /// A CMS-authored page.
    Page {
        /// The page's key in the CMS.
        url_key: String,
    },
    /// The grid view, with its raw filter text.
    Grid {
        /// Everything after `/grid/`.
        filters: String,
    },
    /// The bulk editor.
    BulkEdit,
    /// The library embedded in another site.
    Embed {
        /// Key of the embedding settings.
        settings_key: String,
        /// The collection path inside the embed.
        segments: String,
    },
    /// A whole collection.
    Collection {
        /// The collection name.
        name: String,
    },
    /// A filtered subset of a collection.
    CollectionSubset {
        /// The collection name.
        name: String,
        /// The filters, marker stripped, in path order.
        filters: Vec<String>,
    },
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Redirect { to } => write!(f, "redirect to {to}"),
            Self::BannerPreview { id } => write!(f, "banner preview {id}"),
            Self::Book { breadcrumbs, id } if breadcrumbs.is_empty() => write!(f, "book {id}"),
            Self::Book { breadcrumbs, id } => {
                write!(f, "book {id} (via {})", breadcrumbs.join("/"))
            }
            Self::Player { id } => write!(f, "player {id}"),
            Self::Page { url_key } => write!(f, "page {url_key}"),
            Self::Grid { filters } => write!(f, "grid {filters}"),
            Self::BulkEdit => write!(f, "bulk edit"),
            Self::Embed {
                settings_key,
                segments,
            } => write!(f, "embed {settings_key}: {segments}"),
            Self::Collection { name } => write!(f, "collection {name}"),
            Self::CollectionSubset { name, filters } => {
                write!(f, "collection {name} filtered by {}", filters.join(", "))
            }
        }
    }
}

/// The ordered set of rules used to classify paths.
///
/// # Examples
///
/// ```
/// use shelfpath::route::{Route, RouteTable};
///
/// let table = RouteTable::default();
/// assert_eq!(
///     table.classify("/browse"),
///     Route::Redirect { to: "/create".into() }
/// );
/// assert_eq!(
///     table.classify("/enabling-writers/ew-nigeria"),
///     Route::Collection { name: "ew-nigeria".into() }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    redirects: Vec<RedirectRule>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(RedirectRule::defaults())
    }
}

impl RouteTable {
    /// Create a table with the given redirect aliases.
    #[must_use]
    pub fn new(redirects: Vec<RedirectRule>) -> Self {
        Self { redirects }
    }

    /// Build a table from the `redirects` section of a configuration,
    /// falling back to the built-in aliases when it is absent.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        config
            .redirects
            .clone()
            .map_or_else(Self::default, Self::new)
    }

    /// The redirect aliases, in match order.
    #[must_use]
    pub fn redirects(&self) -> &[RedirectRule] {
        &self.redirects
    }

    /// Classify a path. The first matching rule wins.
    #[must_use]
    pub fn classify(&self, path: &str) -> Route {
        let segments = split_segments(path);

        if let Some(rule) = self
            .redirects
            .iter()
            .find(|rule| has_prefix(&segments, &split_segments(&rule.from)))
        {
            log::debug!("{path} matches redirect {} -> {}", rule.from, rule.to);
            return Route::Redirect {
                to: rule.to.clone(),
            };
        }

        match segments.as_slice() {
            ["_previewBanner", id, ..] if !id.is_empty() => {
                return Route::BannerPreview { id: id.to_string() };
            }
            _ => {}
        }

        if let Some(index) = segments
            .iter()
            .position(|segment| *segment == "book")
            .filter(|index| segments.get(index + 1).is_some_and(|id| !id.is_empty()))
        {
            return Route::Book {
                breadcrumbs: segments[..index].iter().map(ToString::to_string).collect(),
                id: segments[index + 1].to_string(),
            };
        }

        match segments.as_slice() {
            ["player", id, ..] if !id.is_empty() => Route::Player { id: id.to_string() },
            ["about", ..] => Route::Page {
                url_key: "about".to_string(),
            },
            ["grid", rest @ ..] => Route::Grid {
                filters: rest.join("/"),
            },
            ["create"] => Route::Collection {
                name: "create".to_string(),
            },
            ["bulk", ..] => Route::BulkEdit,
            ["embed", settings_key, rest @ ..] if !settings_key.is_empty() => Route::Embed {
                settings_key: settings_key.to_string(),
                segments: rest.join("/"),
            },
            ["page", .., page_name] if !page_name.is_empty() => Route::Page {
                url_key: page_name.to_string(),
            },
            _ => collection_route(path),
        }
    }
}

/// Classify a path with the default route table.
#[must_use]
pub fn classify(path: &str) -> Route {
    RouteTable::default().classify(path)
}

fn collection_route(path: &str) -> Route {
    let parsed = ParsedPath::parse(path);
    if parsed.filters.is_empty() {
        Route::Collection {
            name: parsed.collection_name,
        }
    } else {
        Route::CollectionSubset {
            name: parsed.collection_name,
            filters: parsed.filters,
        }
    }
}

/// Path segments without leading separators or a single trailing one.
fn split_segments(path: &str) -> Vec<&str> {
    let trimmed = path.trim_start_matches(SEPARATOR);
    let trimmed = trimmed.strip_suffix(SEPARATOR).unwrap_or(trimmed);
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split(SEPARATOR).collect()
    }
}

fn has_prefix(segments: &[&str], prefix: &[&str]) -> bool {
    !prefix.is_empty() && segments.starts_with(prefix)
}
