//! Resolving a browser path against a collection provider.
//!
//! This is the one place where the grammar, the provider and the filter
//! chain meet: parse the path, look the collection up by name, and keep
//! the filter chain ready to apply.

use serde::Serialize;

use crate::collection::{Collection, CollectionProvider, Lookup};
use crate::error::{Error, Result};
use crate::filter::{parse_chain, resolve, try_resolve, DerivedCollection, FilterToken, Layout};
use crate::path::ParsedPath;

/// Where a path leads, once its collection has been looked up.
#[derive(Debug, Clone)]
pub enum Location<C> {
    /// The provider is still fetching the collection.
    Pending(ParsedPath),
    /// The collection is available.
    Ready(ResolvedLocation<C>),
}

impl<C> Location<C> {
    /// The parsed path, whether or not the collection is available yet.
    #[must_use]
    pub fn parsed(&self) -> &ParsedPath {
        match self {
            Self::Pending(parsed) => parsed,
            Self::Ready(resolved) => &resolved.parsed,
        }
    }

    /// The resolved location, if the collection is available.
    #[must_use]
    pub fn ready(self) -> Option<ResolvedLocation<C>> {
        match self {
            Self::Pending(_) => None,
            Self::Ready(resolved) => Some(resolved),
        }
    }
}

/// A parsed path together with the collection it names.
#[derive(Debug, Clone)]
pub struct ResolvedLocation<C> {
    /// The parsed path.
    pub parsed: ParsedPath,
    /// The path's filters as typed tokens, in path order.
    pub chain: Vec<FilterToken>,
    /// The collection named by the path, before filtering.
    pub base: C,
}

impl<C: Collection> ResolvedLocation<C> {
    /// Apply the filter chain to the base collection.
    #[must_use]
    pub fn derive(&self) -> DerivedCollection<'_, C> {
        resolve(&self.base, &self.chain)
    }
}

impl<C: Collection + Clone> ResolvedLocation<C> {
    /// Summarize the location for display.
    #[must_use]
    pub fn report(&self) -> LocationReport<C> {
        self.report_from(self.derive())
    }

    /// Summarize the location, failing on the first invalid `skip` value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFilterValue`] if a `skip` value is not a
    /// non-negative integer.
    pub fn try_report(&self) -> Result<LocationReport<C>> {
        Ok(self.report_from(try_resolve(&self.base, &self.chain)?))
    }

    fn report_from(&self, derived: DerivedCollection<'_, C>) -> LocationReport<C> {
        LocationReport {
            path: self.parsed.to_path(),
            collection_name: self.parsed.collection_name.clone(),
            breadcrumbs: self.parsed.breadcrumbs.clone(),
            filters: self.parsed.filters.clone(),
            layout: derived.layout(),
            skip: derived.skip(),
            collection: derived.into_narrowed().unwrap_or_else(|| self.base.clone()),
        }
    }
}

/// A flattened, serializable view of a resolved location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationReport<C> {
    /// The normalized path.
    pub path: String,
    /// The collection named by the path.
    pub collection_name: String,
    /// The breadcrumb trail.
    pub breadcrumbs: Vec<String>,
    /// The raw filters.
    pub filters: Vec<String>,
    /// The chosen layout.
    pub layout: Layout,
    /// The page offset.
    pub skip: usize,
    /// The narrowed collection.
    pub collection: C,
}

/// Parse `path` and look its collection up in `provider`.
///
/// # Errors
///
/// Returns [`Error::UnresolvableCollection`] if the provider has no
/// collection with the parsed name.
///
/// # Examples
///
/// ```
/// use shelfpath::catalog::Catalog;
/// use shelfpath::config::CollectionDefinition;
/// use shelfpath::filter::Layout;
/// use shelfpath::location::locate;
///
/// let catalog = Catalog::new(vec![CollectionDefinition::new("ew-nigeria", "Enabling Writers Nigeria")]);
/// let location = locate(&catalog, "/enabling-writers/ew-nigeria/:level:1").unwrap();
/// let resolved = location.ready().unwrap();
/// assert_eq!(resolved.derive().layout(), Layout::ByTopic);
///
/// assert!(locate(&catalog, "/missing").unwrap_err().is_not_found());
/// ```
pub fn locate<P: CollectionProvider>(provider: &P, path: &str) -> Result<Location<P::Collection>> {
    let parsed = ParsedPath::parse(path);
    match provider.lookup(&parsed.collection_name) {
        Lookup::Found(base) => {
            let chain = parse_chain(&parsed.filters);
            Ok(Location::Ready(ResolvedLocation {
                parsed,
                chain,
                base,
            }))
        }
        Lookup::Loading => Ok(Location::Pending(parsed)),
        Lookup::NotFound => Err(Error::UnresolvableCollection {
            name: parsed.collection_name,
        }),
    }
}
