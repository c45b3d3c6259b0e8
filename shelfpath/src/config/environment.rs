//! Environment variable handling for configuration overrides.
//!
//! This module provides support for SHELFPATH_* environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::route::RedirectRule;
use std::env;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use shelfpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// - `SHELFPATH_OUTPUT_FORMAT`: `human`, `json` or `yaml`
    /// - `SHELFPATH_REDIRECTS`: comma-separated `from=to` aliases, added to
    ///   the configured ones, or to the built-in ones when none are configured
    /// - `SHELFPATH_DISABLE_DEFAULT_REDIRECTS`: boolean; when true and no
    ///   aliases are configured, no aliases apply at all
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(format) = env::var("SHELFPATH_OUTPUT_FORMAT") {
            config.output_format = Some(Self::parse_output_format(&format)?);
        }

        if let Ok(val) = env::var("SHELFPATH_DISABLE_DEFAULT_REDIRECTS") {
            if Self::parse_bool("SHELFPATH_DISABLE_DEFAULT_REDIRECTS", &val)? {
                config.redirects.get_or_insert_with(Vec::new);
            }
        }

        if let Ok(redirects) = env::var("SHELFPATH_REDIRECTS") {
            let rules = Self::parse_redirects(&redirects)?;
            config
                .redirects
                .get_or_insert_with(RedirectRule::defaults)
                .extend(rules);
        }

        Ok(())
    }

    fn parse_output_format(s: &str) -> Result<OutputFormat> {
        s.parse().map_err(|message| Error::Validation {
            field: "SHELFPATH_OUTPUT_FORMAT".into(),
            message,
        })
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Parse redirects from a comma-separated `from=to` list.
    fn parse_redirects(s: &str) -> Result<Vec<RedirectRule>> {
        let mut rules = Vec::new();

        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let (from, to) = part.split_once('=').ok_or_else(|| Error::Validation {
                field: "SHELFPATH_REDIRECTS".into(),
                message: format!("Expected from=to, got: {part}"),
            })?;
            rules.push(RedirectRule::new(from.trim(), to.trim()));
        }

        Ok(rules)
    }
}
