#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # shelfpath
//!
//! A library for resolving hierarchical collection paths on book library
//! sites.
//!
//! A path such as `/enabling-writers/ew-nigeria/:level:1/:topic:Agriculture`
//! names a collection (`ew-nigeria`), the breadcrumb trail that led to it
//! (`enabling-writers`), and a chain of filters that narrow it. This crate
//! parses such paths, applies the filters to a collection, and composes the
//! paths of links between collections.
//!
//! ## Core Types
//!
//! - [`ParsedPath`] with [`parse`] and [`compose`]: the path grammar
//! - [`FilterToken`], [`DerivedCollection`] and [`resolve`]: filter chains
//! - [`compose_target_path`]: links from one collection to another
//! - [`Collection`] and [`CollectionProvider`]: what the caller supplies
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use shelfpath::{compose_target_path, parse};
//!
//! let parsed = parse("/enabling-writers/ew-nigeria/:level:1");
//! assert_eq!(parsed.collection_name, "ew-nigeria");
//! assert_eq!(parsed.filters, vec!["level:1"]);
//!
//! assert_eq!(
//!     compose_target_path("/enabling-writers", "ew-nigeria"),
//!     "enabling-writers/ew-nigeria"
//! );
//! ```

pub mod catalog;
pub mod collection;
pub mod config;
pub mod embed;
pub mod error;
pub mod filter;
pub mod location;
pub mod logging;
pub mod output;
pub mod path;
pub mod route;

// Re-export key types at crate root for convenience
pub use catalog::{Catalog, CatalogCollection};
pub use collection::{Collection, CollectionProvider, Lookup};
pub use config::{Config, ConfigBuilder};
pub use embed::{EmbedRegistry, EmbedSettings};
pub use error::{Error, Result};
pub use filter::{resolve, try_resolve, DerivedCollection, FilterKind, FilterToken, Layout};
pub use location::{locate, Location, LocationReport, ResolvedLocation};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{book_return_path, compose, compose_target_path, parse, ParsedPath};
pub use route::{Route, RouteTable};
