//! Text analysis for the auction search index.
//!
//! This module holds the normalization pipeline and its building blocks:
//! char filters that rewrite whole strings, the identifier extractors, the
//! unique-token tokenizer and stopword removal.

pub mod char_filter;
pub mod extractor;
pub mod normalizer;
pub mod token_filter;
pub mod tokenizer;
