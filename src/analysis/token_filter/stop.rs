//! Stop word removal.
//!
//! The normalizer hands canonical text (lowercase, accent-folded, single
//! spaces) to a [`StopWordProvider`] together with the configured index
//! language. [`StopWordFilter`] is the built-in provider with lists for
//! English, German, French and Spanish. Its words are stored in folded form
//! (`fur`, not `für`) because folding happens before stopword removal.
//!
//! # Examples
//!
//! ```
//! use lotnorm::analysis::token_filter::stop::{StopWordFilter, StopWordProvider};
//!
//! let filter = StopWordFilter::new();
//! assert_eq!(filter.filter("the painting of a ship", "en"), "painting ship");
//! // unknown languages pass through
//! assert_eq!(filter.filter("the painting", "xx"), "the painting");
//! ```

use std::sync::{Arc, LazyLock};

use ahash::{AHashMap, AHashSet};

/// Removes language-specific stopwords from whitespace-separated text.
pub trait StopWordProvider: Send + Sync {
    /// Remove stopwords for `language` from `text`.
    fn filter(&self, text: &str, language: &str) -> String;
}

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

const GERMAN_STOP_WORDS: &[&str] = &[
    "aber", "als", "am", "an", "auch", "auf", "aus", "bei", "bis", "das", "dass", "dem", "den",
    "der", "des", "die", "ein", "eine", "einem", "einen", "einer", "es", "fur", "im", "in", "ist",
    "mit", "nach", "nicht", "oder", "sich", "sie", "sind", "uber", "um", "und", "von", "vom",
    "zu", "zum", "zur",
];

const FRENCH_STOP_WORDS: &[&str] = &[
    "a", "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "est", "et",
    "il", "la", "le", "les", "leur", "mais", "ne", "ou", "par", "pas", "pour", "qui", "que",
    "sa", "se", "ses", "son", "sur", "un", "une",
];

const SPANISH_STOP_WORDS: &[&str] = &[
    "a", "al", "como", "con", "de", "del", "el", "en", "es", "la", "las", "lo", "los", "mas",
    "o", "para", "pero", "por", "que", "se", "sin", "su", "sus", "un", "una", "y",
];

fn word_set(words: &[&str]) -> Arc<AHashSet<String>> {
    Arc::new(words.iter().map(|&s| s.to_string()).collect())
}

/// Built-in stop word lists keyed by primary language subtag.
pub static DEFAULT_STOP_WORD_LISTS: LazyLock<AHashMap<String, Arc<AHashSet<String>>>> =
    LazyLock::new(|| {
        [
            ("en", ENGLISH_STOP_WORDS),
            ("de", GERMAN_STOP_WORDS),
            ("fr", FRENCH_STOP_WORDS),
            ("es", SPANISH_STOP_WORDS),
        ]
        .into_iter()
        .map(|(lang, words)| (lang.to_string(), word_set(words)))
        .collect()
    });

/// Reduce a language tag to the key used for lookups: `"en-US"` -> `"en"`.
fn language_key(language: &str) -> String {
    language
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// The default [`StopWordProvider`].
#[derive(Clone, Debug)]
pub struct StopWordFilter {
    lists: AHashMap<String, Arc<AHashSet<String>>>,
}

impl StopWordFilter {
    /// Create a filter with the built-in lists.
    pub fn new() -> Self {
        StopWordFilter {
            lists: DEFAULT_STOP_WORD_LISTS.clone(),
        }
    }

    /// Create a filter with no lists at all.
    pub fn empty() -> Self {
        StopWordFilter {
            lists: AHashMap::new(),
        }
    }

    /// Register (or replace) the list for `language`.
    pub fn with_language<I, S>(mut self, language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words.into_iter().map(|s| s.into()).collect();
        self.lists.insert(language_key(language), Arc::new(words));
        self
    }

    /// Check if `word` is a stop word in `language`.
    pub fn is_stop_word(&self, language: &str, word: &str) -> bool {
        self.lists
            .get(&language_key(language))
            .is_some_and(|words| words.contains(word))
    }

    /// Whether a list is registered for `language`.
    pub fn supports(&self, language: &str) -> bool {
        self.lists.contains_key(&language_key(language))
    }
}

impl Default for StopWordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl StopWordProvider for StopWordFilter {
    fn filter(&self, text: &str, language: &str) -> String {
        let Some(words) = self.lists.get(&language_key(language)) else {
            log::debug!("stop: no stop word list for language {language:?}");
            return text.to_string();
        };

        text.split_whitespace()
            .filter(|token| !words.contains(*token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
