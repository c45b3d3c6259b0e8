//! Collection paths: parsing, composing, and navigation.
//!
//! # Key Concepts
//!
//! ## Grammar
//!
//! A path such as `/enabling-writers/ew-nigeria/:level:1/:topic:Agriculture`
//! splits into:
//!
//! - **breadcrumbs** (`["enabling-writers"]`): the trail leading to the collection
//! - **collection name** (`"ew-nigeria"`): the rightmost segment without a `:` marker
//! - **filters** (`["level:1", "topic:Agriculture"]`): marked segments after it
//!
//! Paths that name no collection resolve to the root collection, `root.read`.
//!
//! ## Composition
//!
//! [`compose`] is the inverse of [`parse`], and [`compose_target_path`]
//! builds the next location from the current one while keeping the
//! breadcrumb trail intact.
//!
//! # Examples
//!
//! ```
//! use shelfpath::path::{compose_target_path, parse};
//!
//! let here = "/enabling-writers/ew-nigeria";
//! let next = compose_target_path(here, "ew-nigeria/:level:1");
//! assert_eq!(next, "enabling-writers/ew-nigeria/:level:1");
//!
//! let parsed = parse(next.as_str());
//! assert_eq!(parsed.collection_name, "ew-nigeria");
//! assert_eq!(parsed.filters, vec!["level:1"]);
//! ```

pub mod composer;
pub mod grammar;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use composer::{book_return_path, compose_target_path};
pub use grammar::{
    compose, parse, ParsedPath, PathToken, MARKER, READ_COLLECTION, ROOT_COLLECTION, SEPARATOR,
};
