//! Configuration schema definitions.
//!
//! This module defines the configuration structure for shelfpath: the
//! collection catalog, route aliases, embedding hosts and output settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::embed::EmbedSettings;
use crate::route::RedirectRule;

/// Complete configuration structure.
///
/// All fields are optional so that partial files can be layered on top of
/// each other.
///
/// # Examples
///
/// ```
/// use shelfpath::config::{CollectionDefinition, Config};
///
/// let config = Config {
///     collections: Some(vec![CollectionDefinition::new("create", "Create")]),
///     ..Default::default()
/// };
/// assert_eq!(config.collections.as_ref().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Collections served by the offline catalog.
    pub collections: Option<Vec<CollectionDefinition>>,

    /// Route aliases. When absent the built-in aliases apply.
    pub redirects: Option<Vec<RedirectRule>>,

    /// Embedding hosts.
    pub embeds: Option<Vec<EmbedSettings>>,

    /// Output format for CLI reports.
    pub output_format: Option<OutputFormat>,
}

/// A collection in the offline catalog.
///
/// # Examples
///
/// ```
/// use shelfpath::config::CollectionDefinition;
///
/// let yaml = "url_key: ew-nigeria\nlabel: Nigeria\nfilter:\n  level: \"1\"\n";
/// let definition: CollectionDefinition = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(definition.filter.level.as_deref(), Some("1"));
/// assert!(definition.children.is_empty());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CollectionDefinition {
    /// Key used in paths.
    pub url_key: String,

    /// Display label; the URL key is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Layout the collection asks for (e.g. `by-language`). Path resolution
    /// picks layouts from filters and does not consult this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    /// URL keys of child collections.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,

    /// The books this collection contains.
    #[serde(default)]
    pub filter: BookQuery,
}

impl CollectionDefinition {
    /// Create a definition with a key and label and no filter.
    #[must_use]
    pub fn new(url_key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url_key: url_key.into(),
            label: Some(label.into()),
            layout: None,
            children: Vec::new(),
            filter: BookQuery::default(),
        }
    }

    /// The label to show, falling back to the URL key.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.url_key)
    }
}

/// A query over books, as accumulated by narrowing.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BookQuery {
    /// Reading level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Topic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// Search terms, all of which must match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search: Vec<String>,
}

impl fmt::Display for BookQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = Vec::new();
        if let Some(level) = &self.level {
            terms.push(format!("level={level}"));
        }
        if let Some(topic) = &self.topic {
            terms.push(format!("topic={topic}"));
        }
        terms.extend(self.search.iter().map(|term| format!("search={term}")));
        if terms.is_empty() {
            write!(f, "all books")
        } else {
            write!(f, "{}", terms.join(" "))
        }
    }
}

/// Output format for CLI reports.
///
/// # Examples
///
/// ```
/// use shelfpath::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// JSON output format.
    Json,
    /// YAML output format.
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}
