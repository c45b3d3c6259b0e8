//! Filter chains: typed filter tokens folded over a collection.
//!
//! The filters of a parsed path (`level:1`, `topic:Agriculture`, `search:dogs`,
//! `skip:20`) are interpreted in path order. Narrowing filters are handed to
//! the [`Collection`](crate::collection::Collection) they apply to; `skip`
//! sets the page offset; unknown kinds are ignored. The display
//! [`Layout`] is chosen from the set of kinds present, independently of the
//! narrowing.
//!
//! # Examples
//!
//! ```
//! use shelfpath::filter::{choose_layout, parse_chain, Layout};
//!
//! let chain = parse_chain(&["level:1", "topic:Agriculture"]);
//! assert_eq!(choose_layout(&chain), Layout::Flat);
//! ```

pub mod layout;
pub mod resolver;
pub mod token;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use layout::{choose_layout, Layout};
pub use resolver::{resolve, try_resolve, DerivedCollection};
pub use token::{parse_chain, FilterKind, FilterToken};
