//! Token splitting for index text.
//!
//! A token is a maximal run of Unicode letters and decimal digits, lowercased.
//! Everything else (punctuation, symbols, whitespace, combining marks) ends a
//! token.
//!
//! # Examples
//!
//! ```
//! use lotnorm::analysis::tokenizer::UniqueTokenizer;
//!
//! let tokenizer = UniqueTokenizer::new().unwrap();
//! assert_eq!(tokenizer.filter_to_unique_sorted_text("the the Cat cat 3 3"), "3 cat the");
//! assert_eq!(tokenizer.filter_by_min_length("a bb ccc dddd", 3), "ccc dddd");
//! ```

use ahash::AHashSet;
use regex::Regex;

use crate::error::{LotnormError, Result};

const TOKEN_PATTERN: &str = r"[\p{L}\d]+";

/// Splits text into unique lowercase tokens.
#[derive(Clone, Debug)]
pub struct UniqueTokenizer {
    pattern: Regex,
}

impl UniqueTokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(TOKEN_PATTERN)
                .map_err(|e| LotnormError::analysis(format!("token pattern: {e}")))?,
        })
    }

    /// Lowercase `text` and return its tokens, deduplicated in first-occurrence order.
    pub fn split_to_unique_tokens(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        let mut seen = AHashSet::new();
        self.pattern
            .find_iter(&text)
            .map(|m| m.as_str())
            .filter(|token| seen.insert(*token))
            .map(str::to_string)
            .collect()
    }

    /// Tokenize, sort by code point and join with single spaces.
    pub fn filter_to_unique_sorted_text(&self, text: &str) -> String {
        let mut tokens = self.split_to_unique_tokens(text);
        tokens.sort_unstable();
        tokens.join(" ")
    }

    /// Keep whitespace-delimited chunks of at least `min_length` characters.
    ///
    /// Length counts Unicode scalar values, not bytes.
    pub fn filter_by_min_length(&self, text: &str, min_length: usize) -> String {
        text.split_whitespace()
            .filter(|chunk| chunk.chars().count() >= min_length)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_to_unique_tokens() {
        let tokenizer = UniqueTokenizer::new().unwrap();
        assert_eq!(
            tokenizer.split_to_unique_tokens("Vase, VASE & bowl (2x) bowl"),
            vec!["vase", "bowl", "2x"]
        );
    }

    #[test]
    fn test_split_keeps_unicode_letters_and_digits() {
        let tokenizer = UniqueTokenizer::new().unwrap();
        assert_eq!(
            tokenizer.split_to_unique_tokens("Ölgemälde—東京 №٣"),
            vec!["ölgemälde", "東京", "٣"]
        );
    }

    #[test]
    fn test_split_empty_and_punctuation_only() {
        let tokenizer = UniqueTokenizer::new().unwrap();
        assert!(tokenizer.split_to_unique_tokens("").is_empty());
        assert!(tokenizer.split_to_unique_tokens(" -- !? ").is_empty());
    }

    #[test]
    fn test_filter_to_unique_sorted_text() {
        let tokenizer = UniqueTokenizer::new().unwrap();
        assert_eq!(
            tokenizer.filter_to_unique_sorted_text("the the Cat cat 3 3"),
            "3 cat the"
        );
        // code point order, not numeric order
        assert_eq!(tokenizer.filter_to_unique_sorted_text("9 10 b A"), "10 9 a b");
    }

    #[test]
    fn test_filter_by_min_length() {
        let tokenizer = UniqueTokenizer::new().unwrap();
        assert_eq!(tokenizer.filter_by_min_length("a bb ccc dddd", 3), "ccc dddd");
        assert_eq!(tokenizer.filter_by_min_length("  äöü ab\tabc  ", 3), "äöü abc");
        assert_eq!(tokenizer.filter_by_min_length("a b", 0), "a b");
        assert_eq!(tokenizer.filter_by_min_length("a b", 5), "");
    }
}
