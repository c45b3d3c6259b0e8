//! Error types for the shelfpath library.
//!
//! Parsing and composing paths never fail; the errors here come from
//! interpreting filter values, looking up collections, checking embeddings,
//! and loading configuration. All of them use `thiserror`.

use thiserror::Error;

/// Result type alias for operations that may fail with a shelfpath error.
///
/// # Examples
///
/// ```
/// use shelfpath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(10)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the shelfpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A filter token carried a value that could not be interpreted.
    ///
    /// Only `skip:` values are interpreted today; they must be non-negative
    /// integers.
    #[error("invalid value '{value}' for filter '{kind}': {reason}")]
    InvalidFilterValue {
        /// The filter kind, e.g. `skip`.
        kind: String,
        /// The raw value that failed to parse.
        value: String,
        /// The reason the value was rejected.
        reason: String,
    },

    /// The collection provider has no collection with this name.
    #[error("collection not found: {name}")]
    UnresolvableCollection {
        /// The collection name parsed from the path.
        name: String,
    },

    /// No embedding settings exist with this key.
    #[error("embed settings '{url_key}' are not recognized")]
    UnknownEmbed {
        /// The settings key from the embed URL.
        url_key: String,
    },

    /// The embedding settings exist but are switched off.
    #[error("embed settings '{url_key}' are not enabled")]
    EmbedDisabled {
        /// The settings key.
        url_key: String,
    },

    /// The embedded path names a different collection than the settings allow.
    #[error("embed settings '{url_key}' are for '{expected}', not '{found}'")]
    EmbedMismatch {
        /// The settings key.
        url_key: String,
        /// The collection the settings are for.
        expected: String,
        /// The collection named by the embedded path.
        found: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A report could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates a collection could not be found.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfpath::Error;
    ///
    /// let err = Error::UnresolvableCollection { name: "ew-nigeria".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UnresolvableCollection { .. } | Self::UnknownEmbed { .. }
        )
    }

    /// Check if error is an embedding rejection.
    #[must_use]
    pub fn is_embed_rejection(&self) -> bool {
        matches!(
            self,
            Self::UnknownEmbed { .. } | Self::EmbedDisabled { .. } | Self::EmbedMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_value_error() {
        let err = Error::InvalidFilterValue {
            kind: "skip".to_string(),
            value: "abc".to_string(),
            reason: "not a non-negative integer".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid value 'abc'"));
        assert!(display.contains("skip"));
    }

    #[test]
    fn test_unresolvable_collection_error() {
        let err = Error::UnresolvableCollection {
            name: "ew-nigeria".to_string(),
        };
        assert_eq!(format!("{err}"), "collection not found: ew-nigeria");
        assert!(err.is_not_found());
        assert!(!err.is_embed_rejection());
    }

    #[test]
    fn test_embed_mismatch_error() {
        let err = Error::EmbedMismatch {
            url_key: "embed-test".to_string(),
            expected: "enabling-writers".to_string(),
            found: "ew-nigeria".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("embed-test"));
        assert!(display.contains("enabling-writers"));
        assert!(display.contains("ew-nigeria"));
        assert!(err.is_embed_rejection());
    }

    #[test]
    fn test_embed_disabled_error() {
        let err = Error::EmbedDisabled {
            url_key: "embed-test".to_string(),
        };
        assert!(format!("{err}").contains("not enabled"));
        assert!(err.is_embed_rejection());
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "collections".to_string(),
            message: "duplicate url_key".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("collections"));
        assert!(display.contains("duplicate url_key"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_configuration_error_conversion() {
        let yaml_err = serde_yaml::from_str::<Vec<u32>>("not: [a list").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(format!("{err}").starts_with("configuration error"));
    }
}
