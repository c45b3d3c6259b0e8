//! Configuration merging and precedence handling.
//!
//! Scalar fields are replaced by higher-precedence sources. List fields are
//! merged by key, with a higher-precedence entry replacing a lower one that
//! has the same key.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use shelfpath::config::{CollectionDefinition, Config, ConfigMerger};
///
/// let low = Config {
///     collections: Some(vec![CollectionDefinition::new("create", "Create")]),
///     ..Default::default()
/// };
/// let high = Config {
///     collections: Some(vec![CollectionDefinition::new("create", "Make books")]),
///     ..Default::default()
/// };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// let collections = result.collections.unwrap();
/// assert_eq!(collections.len(), 1);
/// assert_eq!(collections[0].display_label(), "Make books");
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - `output_format`: source overwrites if Some
    /// - `collections`: merged by `url_key`
    /// - `embeds`: merged by `url_key`
    /// - `redirects`: merged by `from`
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        Self::merge_keyed(&mut target.collections, source.collections.as_ref(), |c| {
            c.url_key.clone()
        });
        Self::merge_keyed(&mut target.embeds, source.embeds.as_ref(), |e| {
            e.url_key.clone()
        });
        Self::merge_keyed(&mut target.redirects, source.redirects.as_ref(), |r| {
            r.from.clone()
        });
    }

    /// Merge a keyed list: matching keys are replaced in place, new keys
    /// are appended in source order.
    fn merge_keyed<T, F>(target: &mut Option<Vec<T>>, source: Option<&Vec<T>>, key: F)
    where
        T: Clone,
        F: Fn(&T) -> String,
    {
        let Some(source) = source else {
            return;
        };

        let merged = target.get_or_insert_with(Vec::new);
        for item in source {
            let item_key = key(item);
            match merged.iter_mut().find(|existing| key(existing) == item_key) {
                Some(existing) => existing.clone_from(item),
                None => merged.push(item.clone()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{CollectionDefinition, OutputFormat};
    use crate::embed::EmbedSettings;
    use crate::route::RedirectRule;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/config/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(ConfigMerger::merge(vec![]), Config::default());
    }

    #[test]
    fn test_output_format_precedence() {
        let merged = ConfigMerger::merge(vec![
            source(
                1,
                Config {
                    output_format: Some(OutputFormat::Yaml),
                    ..Default::default()
                },
            ),
            source(
                2,
                Config {
                    output_format: Some(OutputFormat::Json),
                    ..Default::default()
                },
            ),
            source(3, Config::default()),
        ]);
        assert_eq!(merged.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_collections_merged_by_key() {
        let mut target = Config {
            collections: Some(vec![
                CollectionDefinition::new("a", "A"),
                CollectionDefinition::new("b", "B"),
            ]),
            ..Default::default()
        };
        let overlay = Config {
            collections: Some(vec![
                CollectionDefinition::new("b", "Bee"),
                CollectionDefinition::new("c", "C"),
            ]),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &overlay);

        let labels: Vec<_> = target
            .collections
            .unwrap()
            .iter()
            .map(|c| c.display_label().to_string())
            .collect();
        assert_eq!(labels, vec!["A", "Bee", "C"]);
    }

    #[test]
    fn test_embeds_and_redirects_merged() {
        let mut target = Config {
            embeds: Some(vec![EmbedSettings::new("e", "a")]),
            redirects: Some(vec![RedirectRule::new("/x", "/y")]),
            ..Default::default()
        };
        let mut disabled = EmbedSettings::new("e", "a");
        disabled.enabled = false;
        let overlay = Config {
            embeds: Some(vec![disabled]),
            redirects: Some(vec![RedirectRule::new("/x", "/z")]),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &overlay);

        assert!(!target.embeds.unwrap()[0].enabled);
        assert_eq!(target.redirects.unwrap(), vec![RedirectRule::new("/x", "/z")]);
    }

    #[test]
    fn test_empty_list_keeps_target() {
        let mut target = Config {
            redirects: Some(vec![RedirectRule::new("/x", "/y")]),
            ..Default::default()
        };
        ConfigMerger::merge_into(
            &mut target,
            &Config {
                redirects: Some(vec![]),
                ..Default::default()
            },
        );
        assert_eq!(target.redirects.unwrap().len(), 1);
    }

    #[test]
    fn test_none_target_takes_source_list() {
        let mut target = Config::default();
        ConfigMerger::merge_into(
            &mut target,
            &Config {
                redirects: Some(vec![]),
                ..Default::default()
            },
        );
        assert_eq!(target.redirects, Some(vec![]));
    }
}
