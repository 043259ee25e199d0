//! Configuration for the normalization pipeline.
//!
//! The normalizer reads three settings: the lot number prefix separator, the
//! lot number extension separator, and the index language used to pick a
//! stopword list. They are plain values handed to
//! [`TextNormalizer::new`](crate::analysis::normalizer::TextNormalizer::new);
//! nothing is looked up from global state.
//!
//! # Example
//!
//! ```
//! use lotnorm::config::NormalizerConfig;
//!
//! let config = NormalizerConfig::from_json_str(
//!     r#"{ "separators": { "prefix": "/" }, "index_language": "en" }"#,
//! ).unwrap();
//!
//! assert_eq!(config.separators.prefix, "/");
//! assert_eq!(config.separators.extension, ".");
//! assert_eq!(config.index_language, "en");
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LotnormError, Result};

/// Default separator between a lot number prefix and its numeric body.
pub const DEFAULT_PREFIX_SEPARATOR: &str = "-";

/// Default separator between a lot number body and its extension.
pub const DEFAULT_EXTENSION_SEPARATOR: &str = ".";

/// Separators used to build lot number pattern boundaries.
///
/// Separators must not be letters or digits, otherwise the boundary logic
/// becomes ambiguous. This is a caller responsibility and is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparatorConfig {
    /// Separator between prefix and number, e.g. `-` in `ABC-123`.
    #[serde(default = "default_prefix_separator")]
    pub prefix: String,

    /// Separator between number and extension, e.g. `.` in `123.A`.
    #[serde(default = "default_extension_separator")]
    pub extension: String,
}

fn default_prefix_separator() -> String {
    DEFAULT_PREFIX_SEPARATOR.to_string()
}

fn default_extension_separator() -> String {
    DEFAULT_EXTENSION_SEPARATOR.to_string()
}

impl SeparatorConfig {
    /// Create a separator pair.
    pub fn new<P: Into<String>, E: Into<String>>(prefix: P, extension: E) -> Self {
        SeparatorConfig {
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        SeparatorConfig::new(DEFAULT_PREFIX_SEPARATOR, DEFAULT_EXTENSION_SEPARATOR)
    }
}

/// Read-only settings consumed by the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Lot number separators.
    #[serde(default)]
    pub separators: SeparatorConfig,

    /// Language code of the search index (`"en"`, `"de"`, ...).
    /// Empty disables stopword removal.
    #[serde(default)]
    pub index_language: String,
}

impl NormalizerConfig {
    /// Create a configuration with the given separators and no index language.
    pub fn new(separators: SeparatorConfig) -> Self {
        NormalizerConfig {
            separators,
            index_language: String::new(),
        }
    }

    /// Set the index language.
    pub fn with_index_language<S: Into<String>>(mut self, language: S) -> Self {
        self.index_language = language.into();
        self
    }

    /// Parse a configuration from a JSON document. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LotnormError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_json_str(&content)?;
        log::debug!("loaded normalizer config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Whether stopword removal is enabled.
    pub fn has_index_language(&self) -> bool {
        !self.index_language.is_empty()
    }
}
