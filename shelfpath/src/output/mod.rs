//! Output formatting module for reports.
//!
//! Everything the CLI prints is a [`Report`]: a serializable value with a
//! human-readable rendering. A [`ReportFormatter`] turns a report into text
//! for one [`OutputFormat`].

mod formatters;
mod report;

use crate::Result;

pub use crate::config::OutputFormat;
pub use formatters::{HumanFormatter, JsonFormatter, YamlFormatter};
pub use report::{ComposedPath, ConfigSummary, Report};

/// Trait for formatting reports into one output format.
pub trait ReportFormatter {
    /// Format the given report into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be serialized.
    fn format<R: Report + ?Sized>(&self, report: &R) -> Result<String>;
}

/// Render a report in the given format.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized.
///
/// # Examples
///
/// ```
/// use shelfpath::output::{render, OutputFormat};
/// use shelfpath::path::parse;
///
/// let parsed = parse("/a/b/:level:1");
/// assert!(render(&parsed, OutputFormat::Human).unwrap().contains("collection: b"));
/// assert!(render(&parsed, OutputFormat::Json).unwrap().contains("\"collection_name\": \"b\""));
/// ```
pub fn render<R: Report + ?Sized>(report: &R, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => HumanFormatter.format(report),
        OutputFormat::Json => JsonFormatter.format(report),
        OutputFormat::Yaml => YamlFormatter.format(report),
    }
}
