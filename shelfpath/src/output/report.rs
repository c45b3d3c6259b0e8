//! Reports printed by the CLI.

use std::fmt::{self, Display};
use std::path::PathBuf;

use serde::Serialize;

use crate::config::Config;
use crate::location::LocationReport;
use crate::path::ParsedPath;
use crate::route::Route;

/// A value that can be printed for people or serialized for programs.
pub trait Report: Serialize {
    /// Human-readable rendering, without a trailing newline.
    fn human(&self) -> String;
}

fn join_or_dash(items: &[String], separator: &str) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(separator)
    }
}

impl Report for ParsedPath {
    fn human(&self) -> String {
        format!(
            "path: {}\ncollection: {}\nbreadcrumbs: {}\nfilters: {}",
            self.to_path(),
            self.collection_name,
            join_or_dash(&self.breadcrumbs, "/"),
            join_or_dash(&self.filters, ", "),
        )
    }
}

impl Report for Route {
    fn human(&self) -> String {
        self.to_string()
    }
}

impl<C: Serialize + Display> Report for LocationReport<C> {
    fn human(&self) -> String {
        format!(
            "path: {}\ncollection: {}\nbreadcrumbs: {}\nfilters: {}\nlayout: {}\nskip: {}\nshows: {}",
            self.path,
            self.collection_name,
            join_or_dash(&self.breadcrumbs, "/"),
            join_or_dash(&self.filters, ", "),
            self.layout,
            self.skip,
            self.collection,
        )
    }
}

/// A path produced by composition.
///
/// # Examples
///
/// ```
/// use shelfpath::output::{ComposedPath, Report};
///
/// assert_eq!(ComposedPath::new("ew/ew-nigeria").human(), "ew/ew-nigeria");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedPath {
    /// The composed path.
    pub path: String,
}

impl ComposedPath {
    /// Wrap a composed path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Display for ComposedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl Report for ComposedPath {
    fn human(&self) -> String {
        self.path.clone()
    }
}

/// What a configuration file contains, after it passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSummary {
    /// The file that was checked.
    pub path: PathBuf,
    /// Number of collections defined.
    pub collections: usize,
    /// Number of route aliases defined.
    pub redirects: usize,
    /// Number of embedding hosts defined.
    pub embeds: usize,
}

impl ConfigSummary {
    /// Summarize a configuration read from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            path: path.into(),
            collections: config.collections.as_ref().map_or(0, Vec::len),
            redirects: config.redirects.as_ref().map_or(0, Vec::len),
            embeds: config.embeds.as_ref().map_or(0, Vec::len),
        }
    }
}

impl Report for ConfigSummary {
    fn human(&self) -> String {
        format!(
            "{} is valid: {} collections, {} redirects, {} embeds",
            self.path.display(),
            self.collections,
            self.redirects,
            self.embeds
        )
    }
}
