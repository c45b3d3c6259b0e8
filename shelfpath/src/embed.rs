//! Embedding the library inside another site.
//!
//! An embedding host shows one collection (and anything below it) in an
//! iframe. Each host has a settings record, keyed by `url_key`, that names
//! the collection it may show and whether it is switched on. While
//! embedded, the library reports its location back to the host so the host
//! page can be bookmarked and shared.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::{ParsedPath, SEPARATOR};
use crate::route::{Route, RouteTable};

/// Settings for one embedding host.
///
/// # Examples
///
/// ```
/// use shelfpath::embed::EmbedSettings;
///
/// let settings = EmbedSettings::new("embed-test", "enabling-writers");
/// assert!(settings.enabled);
/// assert!(settings.check("enabling-writers/:level:1").is_ok());
/// assert!(settings.check("ew-nigeria").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EmbedSettings {
    /// The key used in `/embed/<url_key>/...`.
    pub url_key: String,
    /// The collection this host may show.
    pub collection_url_key: String,
    /// Whether the host is allowed to embed at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// The host's domain, for reference. Not enforced: an iframe cannot see
    /// its parent's location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl EmbedSettings {
    /// Create enabled settings for a host.
    #[must_use]
    pub fn new(url_key: impl Into<String>, collection_url_key: impl Into<String>) -> Self {
        Self {
            url_key: url_key.into(),
            collection_url_key: collection_url_key.into(),
            enabled: true,
            domain: None,
        }
    }

    /// Check that `url_segments` may be shown under these settings.
    ///
    /// Only the collection named by the path is compared, so filters on the
    /// allowed collection are fine but its sub-collections are not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmbedDisabled`] if the settings are switched off and
    /// [`Error::EmbedMismatch`] if the path names another collection.
    pub fn check(&self, url_segments: &str) -> Result<ParsedPath> {
        if !self.enabled {
            return Err(Error::EmbedDisabled {
                url_key: self.url_key.clone(),
            });
        }
        let parsed = ParsedPath::parse(url_segments);
        if parsed.collection_name != self.collection_url_key {
            return Err(Error::EmbedMismatch {
                url_key: self.url_key.clone(),
                expected: self.collection_url_key.clone(),
                found: parsed.collection_name,
            });
        }
        Ok(parsed)
    }
}

/// The known embedding hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedRegistry {
    settings: Vec<EmbedSettings>,
}

impl EmbedRegistry {
    /// Create a registry from settings records.
    #[must_use]
    pub fn new(settings: Vec<EmbedSettings>) -> Self {
        Self { settings }
    }

    /// Create a registry from the `embeds` section of a configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.embeds.clone().unwrap_or_default())
    }

    /// Find the settings with the given key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEmbed`] if no settings have that key.
    pub fn lookup(&self, url_key: &str) -> Result<&EmbedSettings> {
        self.settings
            .iter()
            .find(|settings| settings.url_key == url_key)
            .ok_or_else(|| Error::UnknownEmbed {
                url_key: url_key.to_string(),
            })
    }

    /// Look up the settings and check the path against them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEmbed`], [`Error::EmbedDisabled`] or
    /// [`Error::EmbedMismatch`].
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfpath::embed::{EmbedRegistry, EmbedSettings};
    ///
    /// let registry = EmbedRegistry::new(vec![EmbedSettings::new("embed-test", "enabling-writers")]);
    /// assert!(registry.check("embed-test", "enabling-writers").is_ok());
    /// assert!(registry.check("nope", "enabling-writers").unwrap_err().is_not_found());
    /// ```
    pub fn check(&self, url_key: &str, url_segments: &str) -> Result<ParsedPath> {
        self.lookup(url_key)?.check(url_segments)
    }
}

/// The location an embedded page reports back to its host.
///
/// Book and player pages keep their trail and id; everything else is
/// reduced to breadcrumbs plus collection name. The query string, if any,
/// is appended unchanged. Returns `None` when the location would start with
/// `embed`, which would nest one embed inside another.
///
/// # Examples
///
/// ```
/// use shelfpath::embed::host_location;
/// use shelfpath::route::RouteTable;
///
/// let routes = RouteTable::default();
/// assert_eq!(
///     host_location(&routes, "/enabling-writers/ew-nigeria/:level:1", "?lang=fr"),
///     Some("enabling-writers/ew-nigeria?lang=fr".to_string())
/// );
/// assert_eq!(
///     host_location(&routes, "/enabling-writers/book/abc", ""),
///     Some("enabling-writers/book/abc".to_string())
/// );
/// assert_eq!(host_location(&routes, "/embed/x/embed/y", ""), None);
/// ```
#[must_use]
pub fn host_location(routes: &RouteTable, pathname: &str, search: &str) -> Option<String> {
    let trail = match routes.classify(pathname) {
        Route::Book { mut breadcrumbs, id } => {
            breadcrumbs.extend(["book".to_string(), id]);
            breadcrumbs
        }
        Route::Player { id } => vec!["player".to_string(), id],
        _ => {
            let parsed = ParsedPath::parse(pathname);
            let mut trail = parsed.breadcrumbs;
            trail.push(parsed.collection_name);
            trail
        }
    };

    if trail.first().is_some_and(|first| first == "embed") {
        log::debug!("double embed in location {pathname}; not reporting it to the host");
        return None;
    }
    Some(format!("{}{search}", trail.join(&SEPARATOR.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> EmbedRegistry {
        let mut disabled = EmbedSettings::new("off", "enabling-writers");
        disabled.enabled = false;
        EmbedRegistry::new(vec![
            EmbedSettings::new("embed-test", "enabling-writers"),
            disabled,
        ])
    }

    #[test]
    fn test_check_accepts_collection_and_filters() {
        let parsed = registry()
            .check("embed-test", "enabling-writers/:level:1")
            .unwrap();
        assert_eq!(parsed.collection_name, "enabling-writers");
        assert_eq!(parsed.filters, vec!["level:1"]);
    }

    #[test]
    fn test_check_rejects_sub_collection() {
        let err = registry()
            .check("embed-test", "enabling-writers/ew-nigeria")
            .unwrap_err();
        match err {
            Error::EmbedMismatch {
                expected, found, ..
            } => {
                assert_eq!(expected, "enabling-writers");
                assert_eq!(found, "ew-nigeria");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_check_disabled() {
        let err = registry().check("off", "enabling-writers").unwrap_err();
        assert!(matches!(err, Error::EmbedDisabled { .. }));
    }

    #[test]
    fn test_check_unknown() {
        let err = registry().check("missing", "enabling-writers").unwrap_err();
        assert!(matches!(err, Error::UnknownEmbed { .. }));
    }

    #[test]
    fn test_settings_yaml_defaults() {
        let settings: EmbedSettings =
            serde_yaml::from_str("url_key: a\ncollection_url_key: b\n").unwrap();
        assert!(settings.enabled);
        assert_eq!(settings.domain, None);
    }

    #[test]
    fn test_host_location_collection() {
        let routes = RouteTable::default();
        assert_eq!(
            host_location(&routes, "/enabling-writers/ew-nigeria", ""),
            Some("enabling-writers/ew-nigeria".to_string())
        );
        assert_eq!(
            host_location(&routes, "/", ""),
            Some("root.read".to_string())
        );
    }

    #[test]
    fn test_host_location_player() {
        let routes = RouteTable::default();
        assert_eq!(
            host_location(&routes, "/player/abc", "?x=1"),
            Some("player/abc?x=1".to_string())
        );
    }

    #[test]
    fn test_host_location_double_embed() {
        let routes = RouteTable::default();
        assert_eq!(host_location(&routes, "/embed/a/enabling-writers", ""), None);
    }
}
