//! The contract between path resolution and whatever stores collections.
//!
//! The resolver never builds or queries collections itself. A
//! [`CollectionProvider`] hands out collection values by name, and each
//! [`Collection`] knows how to produce narrower copies of itself.

/// A filterable grouping of books that can be narrowed.
///
/// Narrowing never mutates `self`; it returns a new value of the same
/// shape that represents the subset.
pub trait Collection {
    /// The subset at the given reading level.
    #[must_use]
    fn narrow_by_level(&self, level: &str) -> Self
    where
        Self: Sized;

    /// The subset about the given topic.
    #[must_use]
    fn narrow_by_topic(&self, topic: &str) -> Self
    where
        Self: Sized;

    /// The subset matching a free-text search.
    #[must_use]
    fn narrow_by_search(&self, search: &str) -> Self
    where
        Self: Sized;
}

/// Outcome of asking a provider for a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<C> {
    /// The collection exists.
    Found(C),
    /// No collection has that name.
    NotFound,
    /// The provider has not finished fetching the collection yet.
    Loading,
}

impl<C> Lookup<C> {
    /// Convert into an `Option`, treating `NotFound` and `Loading` alike.
    pub fn found(self) -> Option<C> {
        match self {
            Self::Found(collection) => Some(collection),
            Self::NotFound | Self::Loading => None,
        }
    }
}

/// Looks up collections by their URL key.
pub trait CollectionProvider {
    /// The collection values this provider hands out.
    type Collection: Collection;

    /// Look up a collection by name.
    fn lookup(&self, name: &str) -> Lookup<Self::Collection>;
}

impl<P: CollectionProvider + ?Sized> CollectionProvider for &P {
    type Collection = P::Collection;

    fn lookup(&self, name: &str) -> Lookup<Self::Collection> {
        (**self).lookup(name)
    }
}
