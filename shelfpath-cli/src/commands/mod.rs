//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `parse`: Split a path into breadcrumbs, collection and filters
//! - `compose`: Join the parts of a path back together
//! - `target`: Compose the link from one collection to another
//! - `resolve`: Apply a path's filters to a configured collection
//! - `route`: Classify a path by the page it leads to
//! - `embed`: Check a path against embedding settings
//! - `host`: Show the location an embedded page reports to its host
//! - `book_return`: Show where to go after leaving a book page
//! - `validate`: Validate configuration file
//! - `completions`: Generate shell completion scripts

pub mod book_return;
pub mod completions;
pub mod compose;
pub mod embed;
pub mod host;
pub mod parse;
pub mod resolve;
pub mod route;
pub mod target;
pub mod validate;

pub use book_return::BookReturnCommand;
pub use completions::CompletionsCommand;
pub use compose::ComposeCommand;
pub use embed::EmbedCommand;
pub use host::HostCommand;
pub use parse::ParseCommand;
pub use resolve::ResolveCommand;
pub use route::RouteCommand;
pub use target::TargetCommand;
pub use validate::ValidateCommand;
