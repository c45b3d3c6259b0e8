//! An in-memory collection provider built from configuration.
//!
//! Real sites fetch collections from a CMS; this provider serves the
//! `collections` section of a configuration file instead, which is enough
//! to resolve paths offline and to test navigation.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::collection::{Collection, CollectionProvider, Lookup};
use crate::config::{BookQuery, CollectionDefinition, Config};
use crate::path::ROOT_COLLECTION;

/// A configured collection, possibly narrowed by filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogCollection {
    /// The collection's URL key.
    pub url_key: String,
    /// Display label, extended as the collection is narrowed.
    pub label: String,
    /// Layout preference declared in configuration. Informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// URL keys of child collections.
    pub children: Vec<String>,
    /// The book query this collection stands for.
    pub query: BookQuery,
}

impl CatalogCollection {
    fn from_definition(definition: &CollectionDefinition) -> Self {
        Self {
            url_key: definition.url_key.clone(),
            label: definition.display_label().to_string(),
            layout: definition.layout.clone(),
            children: definition.children.clone(),
            query: definition.filter.clone(),
        }
    }

    fn narrowed(&self, label_suffix: &str, query: BookQuery) -> Self {
        Self {
            url_key: self.url_key.clone(),
            label: format!("{} - {label_suffix}", self.label),
            layout: self.layout.clone(),
            children: Vec::new(),
            query,
        }
    }
}

impl Collection for CatalogCollection {
    fn narrow_by_level(&self, level: &str) -> Self {
        let query = BookQuery {
            level: Some(level.to_string()),
            ..self.query.clone()
        };
        self.narrowed(&format!("Level {level}"), query)
    }

    fn narrow_by_topic(&self, topic: &str) -> Self {
        let query = BookQuery {
            topic: Some(topic.to_string()),
            ..self.query.clone()
        };
        self.narrowed(topic, query)
    }

    fn narrow_by_search(&self, search: &str) -> Self {
        let mut query = self.query.clone();
        query.search.push(search.to_string());
        self.narrowed(&format!("\"{search}\""), query)
    }
}

impl fmt::Display for CatalogCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.query)
    }
}

/// Serves configured collections by URL key.
///
/// The root collection is always available. Unless configured explicitly,
/// its children are the collections no other collection lists as a child.
///
/// # Examples
///
/// ```
/// use shelfpath::catalog::Catalog;
/// use shelfpath::collection::{CollectionProvider, Lookup};
/// use shelfpath::config::CollectionDefinition;
///
/// let catalog = Catalog::new(vec![CollectionDefinition::new("create", "Create")]);
/// assert!(matches!(catalog.lookup("create"), Lookup::Found(_)));
/// assert!(matches!(catalog.lookup("root.read"), Lookup::Found(_)));
/// assert!(matches!(catalog.lookup("missing"), Lookup::NotFound));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    collections: HashMap<String, CatalogCollection>,
}

impl Catalog {
    /// Build a catalog from collection definitions.
    #[must_use]
    pub fn new(definitions: Vec<CollectionDefinition>) -> Self {
        let mut collections: HashMap<String, CatalogCollection> = definitions
            .iter()
            .map(|definition| {
                (
                    definition.url_key.clone(),
                    CatalogCollection::from_definition(definition),
                )
            })
            .collect();

        if !collections.contains_key(ROOT_COLLECTION) {
            let listed: HashSet<&str> = definitions
                .iter()
                .flat_map(|definition| definition.children.iter().map(String::as_str))
                .collect();
            let mut top_level: Vec<String> = definitions
                .iter()
                .map(|definition| definition.url_key.as_str())
                .filter(|key| !listed.contains(key))
                .map(ToString::to_string)
                .collect();
            top_level.sort();
            let root = CollectionDefinition {
                children: top_level,
                ..CollectionDefinition::new(ROOT_COLLECTION, "All books")
            };
            collections.insert(
                ROOT_COLLECTION.to_string(),
                CatalogCollection::from_definition(&root),
            );
        }

        Self { collections }
    }

    /// Build a catalog from the `collections` section of a configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.collections.clone().unwrap_or_default())
    }

    /// Number of collections, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Whether the catalog holds nothing but the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.len() <= 1
    }
}

impl CollectionProvider for Catalog {
    type Collection = CatalogCollection;

    fn lookup(&self, name: &str) -> Lookup<CatalogCollection> {
        match self.collections.get(name) {
            Some(collection) => Lookup::Found(collection.clone()),
            None => Lookup::NotFound,
        }
    }
}
