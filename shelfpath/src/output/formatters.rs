//! Output formatter implementations.

use crate::Result;

use super::{Report, ReportFormatter};

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl ReportFormatter for HumanFormatter {
    fn format<R: Report + ?Sized>(&self, report: &R) -> Result<String> {
        Ok(report.human())
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format<R: Report + ?Sized>(&self, report: &R) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl ReportFormatter for YamlFormatter {
    fn format<R: Report + ?Sized>(&self, report: &R) -> Result<String> {
        let yaml = serde_yaml::to_string(report)?;
        // serde_yaml ends documents with a newline; callers add their own
        Ok(yaml.trim_end().to_string())
    }
}
