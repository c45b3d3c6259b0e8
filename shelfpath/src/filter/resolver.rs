//! Folding a filter chain over a collection.

use std::convert::Infallible;

use crate::collection::Collection;
use crate::error::Result;

use super::layout::{choose_layout, Layout};
use super::token::{FilterKind, FilterToken};

/// A collection narrowed by a filter chain.
///
/// Borrows the collection the chain started from and owns the narrowed
/// value, if any filter narrowed it.
#[derive(Debug, Clone)]
pub struct DerivedCollection<'a, C> {
    base: &'a C,
    narrowed: Option<C>,
    skip: usize,
    layout: Layout,
}

impl<'a, C> DerivedCollection<'a, C> {
    /// The collection the chain was applied to.
    #[must_use]
    pub fn base(&self) -> &'a C {
        self.base
    }

    /// The collection after every narrowing filter; the base if there were none.
    #[must_use]
    pub fn current(&self) -> &C {
        self.narrowed.as_ref().unwrap_or(self.base)
    }

    /// Whether any filter narrowed the base collection.
    #[must_use]
    pub fn is_narrowed(&self) -> bool {
        self.narrowed.is_some()
    }

    /// Page offset from the last `skip` filter, 0 if there was none.
    #[must_use]
    pub fn skip(&self) -> usize {
        self.skip
    }

    /// The layout chosen for the whole chain.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Take the narrowed collection, if any filter produced one.
    #[must_use]
    pub fn into_narrowed(self) -> Option<C> {
        self.narrowed
    }
}

/// Apply `chain` to `base`, failing on the first invalid `skip` value.
///
/// # Errors
///
/// Returns [`Error::InvalidFilterValue`](crate::Error::InvalidFilterValue) if a `skip` value is not a
/// non-negative integer.
pub fn try_resolve<'a, C: Collection>(
    base: &'a C,
    chain: &[FilterToken],
) -> Result<DerivedCollection<'a, C>> {
    fold(base, chain, FilterToken::skip_value)
}

/// Apply `chain` to `base`.
///
/// Filters run in chain order: `level`, `topic` and `search` narrow the
/// current collection, `skip` sets the page offset (the last one wins), and
/// unknown kinds are skipped. A `skip` value that is not a non-negative
/// integer counts as 0 and is logged.
///
/// # Examples
///
/// ```
/// use shelfpath::collection::Collection;
/// use shelfpath::filter::{parse_chain, resolve, Layout};
///
/// #[derive(Debug, PartialEq)]
/// struct Query(Vec<String>);
///
/// impl Collection for Query {
///     fn narrow_by_level(&self, level: &str) -> Self {
///         let mut terms = self.0.clone();
///         terms.push(format!("level={level}"));
///         Query(terms)
///     }
///     fn narrow_by_topic(&self, topic: &str) -> Self {
///         let mut terms = self.0.clone();
///         terms.push(format!("topic={topic}"));
///         Query(terms)
///     }
///     fn narrow_by_search(&self, search: &str) -> Self {
///         let mut terms = self.0.clone();
///         terms.push(format!("search={search}"));
///         Query(terms)
///     }
/// }
///
/// let base = Query(vec![]);
/// let derived = resolve(&base, &parse_chain(&["level:1", "skip:abc", "topic:x"]));
/// assert_eq!(derived.current().0, vec!["level=1", "topic=x"]);
/// assert_eq!(derived.skip(), 0);
/// assert_eq!(derived.layout(), Layout::Flat);
/// ```
pub fn resolve<'a, C: Collection>(base: &'a C, chain: &[FilterToken]) -> DerivedCollection<'a, C> {
    let recovered = fold(base, chain, |token| -> std::result::Result<usize, Infallible> {
        Ok(token.skip_value().unwrap_or_else(|err| {
            log::warn!("{err}; using skip 0");
            0
        }))
    });
    match recovered {
        Ok(derived) => derived,
        Err(never) => match never {},
    }
}

fn fold<'a, C, E, F>(
    base: &'a C,
    chain: &[FilterToken],
    mut read_skip: F,
) -> std::result::Result<DerivedCollection<'a, C>, E>
where
    C: Collection,
    F: FnMut(&FilterToken) -> std::result::Result<usize, E>,
{
    let mut narrowed: Option<C> = None;
    let mut skip = 0;

    for token in chain {
        let current = narrowed.as_ref().unwrap_or(base);
        match &token.kind {
            FilterKind::Level => narrowed = Some(current.narrow_by_level(&token.value)),
            FilterKind::Topic => narrowed = Some(current.narrow_by_topic(&token.value)),
            FilterKind::Search => narrowed = Some(current.narrow_by_search(&token.value)),
            FilterKind::Skip => skip = read_skip(token)?,
            FilterKind::Unknown(kind) => {
                log::debug!("ignoring filter of unknown kind '{kind}'");
            }
        }
    }

    Ok(DerivedCollection {
        base,
        narrowed,
        skip,
        layout: choose_layout(chain),
    })
}
