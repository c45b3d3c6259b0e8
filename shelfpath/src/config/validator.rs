//! Configuration validation.
//!
//! This module checks that configured URL keys can appear in paths, that
//! collection and embed references point at defined collections, and that
//! route aliases are absolute.

use crate::config::schema::{CollectionDefinition, Config};
use crate::embed::EmbedSettings;
use crate::error::{Error, Result};
use crate::path::{MARKER, READ_COLLECTION, ROOT_COLLECTION, SEPARATOR};
use crate::route::RedirectRule;
use std::collections::HashSet;

/// Validates configuration.
///
/// # Examples
///
/// ```
/// use shelfpath::config::{CollectionDefinition, Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config {
///     collections: Some(vec![CollectionDefinition::new("a/b", "Nested")]),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    pub fn validate(config: &Config) -> Result<()> {
        let mut known = HashSet::new();

        if let Some(ref collections) = config.collections {
            known = Self::validate_collections(collections)?;
        }

        if let Some(ref embeds) = config.embeds {
            // Without a catalog, embeds may name collections served elsewhere
            let catalog = config.collections.is_some().then_some(&known);
            Self::validate_embeds(embeds, catalog)?;
        }

        if let Some(ref redirects) = config.redirects {
            Self::validate_redirects(redirects)?;
        }

        Ok(())
    }

    /// Validate a key that will appear as a single path segment.
    ///
    /// Checks that the key is non-empty after trimming, contains no
    /// separator, does not begin with the filter marker and is not the
    /// `read` sentinel.
    fn validate_url_key(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if value.contains(SEPARATOR) {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Cannot contain '{SEPARATOR}': {value}"),
            });
        }

        if value.starts_with(MARKER) {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Cannot start with '{MARKER}': {value}"),
            });
        }

        if value == READ_COLLECTION {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("'{READ_COLLECTION}' is reserved for the root collection"),
            });
        }

        Ok(())
    }

    /// Validate collection definitions, returning the set of defined keys.
    fn validate_collections(collections: &[CollectionDefinition]) -> Result<HashSet<&str>> {
        let mut seen = HashSet::new();
        seen.insert(ROOT_COLLECTION);

        for (i, collection) in collections.iter().enumerate() {
            let field = format!("collections[{i}].url_key");
            Self::validate_url_key(&field, &collection.url_key)?;

            if collection.url_key != ROOT_COLLECTION && !seen.insert(collection.url_key.as_str()) {
                return Err(Error::Validation {
                    field,
                    message: format!("Duplicate collection: {}", collection.url_key),
                });
            }
        }

        for (i, collection) in collections.iter().enumerate() {
            for child in &collection.children {
                if !seen.contains(child.as_str()) {
                    return Err(Error::Validation {
                        field: format!("collections[{i}].children"),
                        message: format!("Unknown child collection: {child}"),
                    });
                }
            }
        }

        Ok(seen)
    }

    fn validate_embeds(embeds: &[EmbedSettings], catalog: Option<&HashSet<&str>>) -> Result<()> {
        let mut seen = HashSet::new();

        for (i, embed) in embeds.iter().enumerate() {
            let field = format!("embeds[{i}].url_key");
            Self::validate_url_key(&field, &embed.url_key)?;
            if !seen.insert(embed.url_key.as_str()) {
                return Err(Error::Validation {
                    field,
                    message: format!("Duplicate embed: {}", embed.url_key),
                });
            }

            let field = format!("embeds[{i}].collection_url_key");
            Self::validate_url_key(&field, &embed.collection_url_key)?;
            if let Some(known) = catalog {
                if !known.contains(embed.collection_url_key.as_str()) {
                    return Err(Error::Validation {
                        field,
                        message: format!("Unknown collection: {}", embed.collection_url_key),
                    });
                }
            }
        }

        Ok(())
    }

    fn validate_redirects(redirects: &[RedirectRule]) -> Result<()> {
        for (i, rule) in redirects.iter().enumerate() {
            for (name, value) in [("from", &rule.from), ("to", &rule.to)] {
                if !value.starts_with(SEPARATOR) {
                    return Err(Error::Validation {
                        field: format!("redirects[{i}].{name}"),
                        message: format!("Must start with '{SEPARATOR}': {value}"),
                    });
                }
            }
        }
        Ok(())
    }
}
