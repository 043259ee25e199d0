//! The search index normalization pipeline.
//!
//! [`TextNormalizer`] is the single entry point for turning auction listing
//! text into index text. It owns the fixed chain of char filters, the lot and
//! item number extractors and the tokenizer, and calls out to two
//! collaborators supplied at construction: an [`EntityDecoder`] and a
//! [`StopWordProvider`].
//!
//! # Pipeline
//!
//! [`TextNormalizer::filter`] applies, in order:
//!
//! 1. accent folding
//! 2. tag stripping
//! 3. entity decoding (quotes stay encoded)
//! 4. deletion of `_` and `-`, joining hyphenated compounds
//! 5. everything but letters, digits, `,` and `.` becomes a space
//! 6. a `,` or `.` directly before a digit is removed (`1,234` -> `1234`)
//! 7. runs of whitespace, `,` and `.` become one space
//! 8. lowercasing
//! 9. stopword removal, when an index language is configured
//! 10. whitespace collapse and trim
//!
//! # Examples
//!
//! ```
//! use lotnorm::analysis::normalizer::TextNormalizer;
//! use lotnorm::config::NormalizerConfig;
//!
//! let normalizer = TextNormalizer::new(NormalizerConfig::default().with_index_language("en")).unwrap();
//!
//! assert_eq!(
//!     normalizer.filter("<p>The <b>Mid-Century</b> Sideboard, 1,250&nbsp;mm</p>"),
//!     "midcentury sideboard 1250 mm"
//! );
//! ```

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::{
    AccentFoldCharFilter, CharFilter, EntityDecoder, HtmlEntityDecoder, HtmlTagCharFilter,
    PatternReplaceCharFilter,
};
use crate::analysis::extractor::{ExtractionResult, ItemNumberExtractor, LotNumberExtractor};
use crate::analysis::token_filter::{StopWordFilter, StopWordProvider};
use crate::analysis::tokenizer::UniqueTokenizer;
use crate::config::NormalizerConfig;
use crate::error::Result;

/// Canonicalization steps 4 to 7, as (pattern, replacement).
const CANONICALIZE_STEPS: [(&str, &str); 4] = [
    (r"[_-]", ""),
    (r"[^\p{L}\d.,]", " "),
    (r"[,.](\d+)", "${1}"),
    (r"[\s,.]+", " "),
];

/// Identifiers and terms extracted from a search query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryAnalysis {
    /// Lot numbers found in the raw query.
    pub lot_numbers: Vec<String>,
    /// Item numbers found in the raw query.
    pub item_numbers: Vec<String>,
    /// Canonical, unique, sorted terms of what is left after lot numbers are removed.
    pub terms: String,
}

/// Normalizes listing text for the search index.
///
/// Construction compiles every pattern once; after that all methods are pure
/// and the normalizer can be shared freely across threads.
#[derive(Clone)]
pub struct TextNormalizer {
    config: NormalizerConfig,
    accent_fold: Arc<AccentFoldCharFilter>,
    html_tag: HtmlTagCharFilter,
    entity_decoder: Arc<dyn EntityDecoder>,
    canonicalizers: Vec<PatternReplaceCharFilter>,
    whitespace: PatternReplaceCharFilter,
    stop_words: Arc<dyn StopWordProvider>,
    lot_numbers: LotNumberExtractor,
    item_numbers: ItemNumberExtractor,
    tokenizer: UniqueTokenizer,
}

impl TextNormalizer {
    /// Create a normalizer with the built-in entity decoder and stopword lists.
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        let canonicalizers = CANONICALIZE_STEPS
            .iter()
            .map(|(pattern, replacement)| PatternReplaceCharFilter::new(pattern, replacement))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("normalizer: {config:?}");

        Ok(TextNormalizer {
            accent_fold: Arc::new(AccentFoldCharFilter::new()?),
            html_tag: HtmlTagCharFilter::new()?,
            entity_decoder: Arc::new(HtmlEntityDecoder::new()?),
            canonicalizers,
            whitespace: PatternReplaceCharFilter::new(r"\s+", " ")?,
            stop_words: Arc::new(StopWordFilter::new()),
            lot_numbers: LotNumberExtractor::new(&config.separators)?,
            item_numbers: ItemNumberExtractor::new()?,
            tokenizer: UniqueTokenizer::new()?,
            config,
        })
    }

    /// Replace the stopword collaborator.
    pub fn with_stop_words(mut self, stop_words: Arc<dyn StopWordProvider>) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Replace the entity decoding collaborator.
    pub fn with_entity_decoder(mut self, entity_decoder: Arc<dyn EntityDecoder>) -> Self {
        self.entity_decoder = entity_decoder;
        self
    }

    /// Replace the accent folder, e.g. with a locale-specific table.
    pub fn with_accent_fold(mut self, accent_fold: AccentFoldCharFilter) -> Self {
        self.accent_fold = Arc::new(accent_fold);
        self
    }

    /// The configuration this normalizer was built with.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Canonicalize `text` for indexing or querying.
    pub fn filter(&self, text: &str) -> String {
        let mut text = self.accent_fold.filter(text);
        text = self.html_tag.filter(&text);
        text = self.entity_decoder.decode(&text);

        for step in &self.canonicalizers {
            text = step.filter(&text);
        }

        text = text.to_lowercase();

        if self.config.has_index_language() {
            text = self.stop_words.filter(&text, &self.config.index_language);
        }

        let text = self.whitespace.filter(&text).trim().to_string();
        log::trace!("normalizer: filtered to {text:?}");
        text
    }

    /// Canonicalize many texts in parallel, keeping input order.
    pub fn filter_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|text| self.filter(text.as_ref())).collect()
    }

    /// Extract lot numbers; the remainder has every lot number removed.
    pub fn extract_lot_numbers(&self, text: &str) -> ExtractionResult {
        self.lot_numbers.extract(text)
    }

    /// Extract item numbers (bare digit runs).
    pub fn extract_item_numbers(&self, text: &str) -> Vec<String> {
        self.item_numbers.extract(text)
    }

    /// Unique lowercase tokens in first-occurrence order.
    pub fn split_to_unique_tokens(&self, text: &str) -> Vec<String> {
        self.tokenizer.split_to_unique_tokens(text)
    }

    /// Unique lowercase tokens, sorted, joined with single spaces.
    pub fn filter_to_unique_sorted_text(&self, text: &str) -> String {
        self.tokenizer.filter_to_unique_sorted_text(text)
    }

    /// Drop whitespace-delimited chunks shorter than `min_length` characters.
    pub fn filter_by_min_length(&self, text: &str, min_length: usize) -> String {
        self.tokenizer.filter_by_min_length(text, min_length)
    }

    /// Full index text for a listing field: canonical, unique, sorted, and
    /// without tokens shorter than `min_length`.
    pub fn index_text(&self, text: &str, min_length: usize) -> String {
        let text = self.filter(text);
        let text = self.filter_to_unique_sorted_text(&text);
        self.filter_by_min_length(&text, min_length)
    }

    /// Split a search query into identifiers and free-text terms.
    ///
    /// Lot numbers are taken from the raw query before canonicalization would
    /// strip their separators; the remaining text becomes the terms.
    pub fn analyze_query(&self, query: &str) -> QueryAnalysis {
        let ExtractionResult {
            identifiers: lot_numbers,
            remainder,
        } = self.extract_lot_numbers(query);
        let item_numbers = self.extract_item_numbers(query);
        let terms = self.filter_to_unique_sorted_text(&self.filter(&remainder));

        QueryAnalysis {
            lot_numbers,
            item_numbers,
            terms,
        }
    }
}
