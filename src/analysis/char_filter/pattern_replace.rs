use regex::Regex;

use super::CharFilter;
use crate::error::{LotnormError, Result};

/// A char filter that replaces every match of a regex pattern.
///
/// The replacement string may reference capture groups (`${1}`).
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| LotnormError::analysis(format!("invalid pattern {pattern:?}: {e}")))?,
            replacement: replacement.to_string(),
        })
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_replace() {
        let filter = PatternReplaceCharFilter::new(r"\d+", "NUM").unwrap();
        assert_eq!(filter.filter("Year 2024"), "Year NUM");
    }

    #[test]
    fn test_remove_pattern() {
        let filter = PatternReplaceCharFilter::new(r"-", "").unwrap();
        assert_eq!(filter.filter("123-456-789"), "123456789");
    }

    #[test]
    fn test_capture_group_replacement() {
        let filter = PatternReplaceCharFilter::new(r"[,.](\d+)", "${1}").unwrap();
        assert_eq!(filter.filter("1,234.56 and 7."), "123456 and 7.");
    }

    #[test]
    fn test_invalid_pattern() {
        let result = PatternReplaceCharFilter::new(r"(unclosed", "");
        assert!(matches!(result, Err(LotnormError::Analysis(_))));
    }
}
