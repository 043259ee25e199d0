//! Lot number and item number extraction.
//!
//! Identifiers are pulled out of free text by boundary-aware patterns. Each
//! pattern captures `(boundary)(identifier)(boundary)`. A pass collects every
//! non-overlapping match and deletes the identifiers while keeping both
//! boundary characters, so `" 45 "` collapses to `"  "`. Passes repeat until a
//! pattern stops matching, because two candidates sharing one boundary
//! character can only be taken on successive passes.
//!
//! Every match deletes at least one character, so the number of passes is
//! bounded by the length of the input.
//!
//! # Lot number patterns
//!
//! Tried in this order, most specific first (`P` is the prefix separator,
//! `E` the extension separator, alnum is ASCII `[a-zA-Z0-9]`):
//!
//! 1. `PREFIX P 123 E EXT`
//! 2. `PREFIX P 123`, right boundary must not be `E`
//! 3. `123 E EXT`, left boundary must not be `P`
//! 4. `123`, left boundary not `P`, right boundary not `E`
//!
//! # Examples
//!
//! ```
//! use lotnorm::analysis::extractor::LotNumberExtractor;
//! use lotnorm::config::SeparatorConfig;
//!
//! let extractor = LotNumberExtractor::new(&SeparatorConfig::new("-", ".")).unwrap();
//! let result = extractor.extract("Lots ABC-123.X9 and 77");
//!
//! assert_eq!(result.identifiers, vec!["ABC-123.X9", "77"]);
//! assert_eq!(result.remainder, "Lots  and");
//! ```

use ahash::AHashSet;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::SeparatorConfig;
use crate::error::{LotnormError, Result};

const ALNUM: &str = "a-zA-Z0-9";
const ITEM_NUMBER_PATTERN: &str = r"([^0-9])([0-9]+)([^0-9])";

/// Identifiers pulled out of a text, plus what is left of the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Unique identifiers in first-seen order.
    pub identifiers: Vec<String>,
    /// The input with every identifier deleted, trimmed.
    pub remainder: String,
}

/// Outcome of a single collapse pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsePass {
    /// Identifiers captured by this pass, in match order, duplicates included.
    pub captured: Vec<String>,
    /// Text after deleting the captured identifiers.
    pub text: String,
}

/// Run one pass of `pattern` over `text`.
///
/// `pattern` must capture the identifier in group 2, surrounded by the
/// boundary groups 1 and 3. Returns `None` when nothing matched.
pub fn collapse_pass(pattern: &Regex, text: &str) -> Option<CollapsePass> {
    let mut captured = Vec::new();
    let mut collapsed = String::with_capacity(text.len());
    let mut last_end = 0;

    for caps in pattern.captures_iter(text) {
        let Some(identifier) = caps.get(2) else {
            continue;
        };
        collapsed.push_str(&text[last_end..identifier.start()]);
        captured.push(identifier.as_str().to_string());
        last_end = identifier.end();
    }

    if captured.is_empty() {
        return None;
    }

    collapsed.push_str(&text[last_end..]);
    Some(CollapsePass {
        captured,
        text: collapsed,
    })
}

/// Apply `pattern` until it stops matching, appending captures to `found`.
fn drain_pattern(pattern: &Regex, text: &mut String, found: &mut Vec<String>) {
    let mut passes = 0usize;
    while let Some(pass) = collapse_pass(pattern, text) {
        passes += 1;
        log::trace!(
            "extract: pass {passes} of {} captured {:?}",
            pattern.as_str(),
            pass.captured
        );
        found.extend(pass.captured);
        *text = pass.text;
    }
}

/// Deduplicate keeping the first occurrence.
fn unique(values: Vec<String>) -> Vec<String> {
    let mut seen = AHashSet::with_capacity(values.len());
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| LotnormError::analysis(format!("invalid extraction pattern {pattern:?}: {e}")))
}

/// Extracts lot numbers using the configured separators.
#[derive(Clone, Debug)]
pub struct LotNumberExtractor {
    patterns: [Regex; 4],
}

impl LotNumberExtractor {
    /// Build the four lot number patterns for `separators`.
    ///
    /// Separators are escaped, so any punctuation is safe. Letters, digits or
    /// an empty separator make matching overly broad or narrow; that is not
    /// checked here.
    pub fn new(separators: &SeparatorConfig) -> Result<Self> {
        let p = regex::escape(&separators.prefix);
        let e = regex::escape(&separators.extension);

        let patterns = [
            compile(&format!(
                "([^{ALNUM}])([{ALNUM}]{{1,20}}{p}[0-9]+{e}[{ALNUM}]{{1,3}})([^{ALNUM}])"
            ))?,
            compile(&format!(
                "([^{ALNUM}])([{ALNUM}]{{1,20}}{p}[0-9]+)([^{ALNUM}{e}])"
            ))?,
            compile(&format!(
                "([^{ALNUM}{p}])([0-9]+{e}[{ALNUM}]{{1,3}})([^{ALNUM}])"
            ))?,
            compile(&format!("([^{ALNUM}{p}])([0-9]+)([^{ALNUM}{e}])"))?,
        ];

        log::debug!(
            "extract: lot number patterns built for prefix {:?}, extension {:?}",
            separators.prefix,
            separators.extension
        );
        Ok(Self { patterns })
    }

    /// Extract lot numbers from `text`.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let mut text = format!(" {text} ");
        let mut found = Vec::new();

        for pattern in &self.patterns {
            drain_pattern(pattern, &mut text, &mut found);
        }

        ExtractionResult {
            identifiers: unique(found),
            remainder: text.trim().to_string(),
        }
    }
}

/// Extracts bare digit runs (item numbers).
#[derive(Clone, Debug)]
pub struct ItemNumberExtractor {
    pattern: Regex,
}

impl ItemNumberExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: compile(ITEM_NUMBER_PATTERN)?,
        })
    }

    /// Extract item numbers from `text`, unique in first-seen order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut text = format!(" {text} ");
        let mut found = Vec::new();
        drain_pattern(&self.pattern, &mut text, &mut found);
        unique(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> LotNumberExtractor {
        LotNumberExtractor::new(&SeparatorConfig::new("-", ".")).unwrap()
    }

    #[test]
    fn test_full_lot_number_is_taken_whole() {
        let result = extractor().extract("Lot ABC-123.X9 today");
        assert_eq!(result.identifiers, vec!["ABC-123.X9"]);
        assert_eq!(result.remainder, "Lot  today");
    }

    #[test]
    fn test_bare_numbers() {
        let result = extractor().extract("lot 45 and lot 46");
        assert_eq!(result.identifiers, vec!["45", "46"]);
        assert_eq!(result.remainder, "lot  and lot");
    }

    #[test]
    fn test_pattern_priority() {
        let result = extractor().extract("A-1 2.B 3 Z-4.C");
        assert_eq!(result.identifiers, vec!["Z-4.C", "A-1", "2.B", "3"]);
        assert_eq!(result.remainder, "");
    }

    #[test]
    fn test_leading_zeros_preserved_and_deduplicated() {
        let result = extractor().extract("007, 007 and 7");
        assert_eq!(result.identifiers, vec!["007", "7"]);
    }

    #[test]
    fn test_adjacent_matches_need_successive_passes() {
        // "1 2" share the middle space; the second number is only taken on pass two
        let pattern = Regex::new(r"([^0-9])([0-9]+)([^0-9])").unwrap();
        let first = collapse_pass(&pattern, " 1 2 ").unwrap();
        assert_eq!(first.captured, vec!["1"]);
        assert_eq!(first.text, "  2 ");
        let second = collapse_pass(&pattern, &first.text).unwrap();
        assert_eq!(second.captured, vec!["2"]);
        assert!(collapse_pass(&pattern, &second.text).is_none());

        let result = extractor().extract("1 2 3");
        assert_eq!(result.identifiers, vec!["1", "3", "2"]);
    }

    #[test]
    fn test_pass_strictly_shrinks_text() {
        let pattern = Regex::new(ITEM_NUMBER_PATTERN).unwrap();
        let text = " a1b22c333 ";
        let pass = collapse_pass(&pattern, text).unwrap();
        assert!(pass.text.len() < text.len());
    }

    #[test]
    fn test_embedded_digits_are_not_lot_numbers() {
        let result = extractor().extract("model X200 v2");
        assert!(result.identifiers.is_empty());
        assert_eq!(result.remainder, "model X200 v2");
    }

    #[test]
    fn test_prefix_longer_than_twenty_is_ignored() {
        let result = extractor().extract("ABCDEFGHIJKLMNOPQRSTU-5");
        assert!(result.identifiers.is_empty());
    }

    #[test]
    fn test_custom_separators_are_escaped() {
        let extractor = LotNumberExtractor::new(&SeparatorConfig::new("/", "*")).unwrap();
        let result = extractor.extract("see AB/12*C and 9");
        assert_eq!(result.identifiers, vec!["AB/12*C", "9"]);
    }

    #[test]
    fn test_empty_text() {
        let result = extractor().extract("");
        assert!(result.identifiers.is_empty());
        assert_eq!(result.remainder, "");
    }

    #[test]
    fn test_item_numbers() {
        let extractor = ItemNumberExtractor::new().unwrap();
        assert_eq!(
            extractor.extract("item #12, #345 and #6"),
            vec!["12", "345", "6"]
        );
        assert_eq!(extractor.extract("A1B2C1"), vec!["1", "2"]);
        assert!(extractor.extract("no numbers").is_empty());
    }
}
