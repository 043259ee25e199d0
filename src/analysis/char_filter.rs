//! Char filter implementations for text normalization.
//!
//! Char filters rewrite a whole string before it is tokenized. The
//! normalization pipeline is mostly a fixed chain of them.
//!
//! # Available Filters
//!
//! - [`mapping::MappingCharFilter`] - Longest-match string mapping
//! - [`unicode_normalize::UnicodeNormalizeCharFilter`] - NFC/NFD normalization
//! - [`accent_fold::AccentFoldCharFilter`] - Diacritic transliteration to ASCII
//! - [`html_tag::HtmlTagCharFilter`] - Crude start/end tag removal
//! - [`html_entity::HtmlEntityDecoder`] - Character reference decoding
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use lotnorm::analysis::char_filter::CharFilter;
//! use lotnorm::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"[_-]", "").unwrap();
//! assert_eq!(filter.filter("re-issue"), "reissue");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod accent_fold;
pub mod html_entity;
pub mod html_tag;
pub mod mapping;
pub mod pattern_replace;
pub mod unicode_normalize;

pub use accent_fold::AccentFoldCharFilter;
pub use html_entity::{EntityDecoder, HtmlEntityDecoder};
pub use html_tag::HtmlTagCharFilter;
pub use mapping::MappingCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
pub use unicode_normalize::{NormalizationForm, UnicodeNormalizeCharFilter};
