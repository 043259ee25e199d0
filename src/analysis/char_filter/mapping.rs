use aho_corasick::{AhoCorasick, MatchKind};

use super::CharFilter;
use crate::error::{LotnormError, Result};

/// A char filter that replaces mapped strings, preferring the longest key at
/// each position.
///
/// Keys may be single characters or multi-character sequences. A character
/// that starts no key is copied through unchanged.
pub struct MappingCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl MappingCharFilter {
    pub fn new<I, K, V>(mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut keys = Vec::new();
        let mut replacements = Vec::new();

        for (k, v) in mapping {
            let k = k.into();
            // An empty key would match between every pair of characters.
            if k.is_empty() {
                log::debug!("mapping: skipping empty key");
                continue;
            }
            keys.push(k);
            replacements.push(v.into());
        }

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| LotnormError::Anyhow(anyhow::Error::from(e)))?;

        Ok(Self { ac, replacements })
    }

    /// Number of mapped keys.
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);
            output.push_str(&self.replacements[m.pattern().as_usize()]);
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);
        output
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_char_filter() {
        let filter = MappingCharFilter::new([("ph", "f"), ("qu", "k")]).unwrap();
        assert_eq!(filter.filter("phone queue"), "fone keue");
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_mapping_expansion_and_deletion() {
        let filter = MappingCharFilter::new([("a", "aaa"), ("foo", "")]).unwrap();
        assert_eq!(filter.filter("bab"), "baaab");
        assert_eq!(filter.filter("afoob"), "aaab");
    }

    #[test]
    fn test_mapping_longest_key_wins() {
        let filter = MappingCharFilter::new([("ab", "1"), ("abc", "2")]).unwrap();
        assert_eq!(filter.filter("abc"), "2");
        assert_eq!(filter.filter("abd"), "1d");
    }

    #[test]
    fn test_mapping_multibyte() {
        let filter = MappingCharFilter::new([("壱", "1")]).unwrap();
        assert_eq!(filter.filter("第壱位"), "第1位");
    }

    #[test]
    fn test_mapping_skips_empty_key() {
        let filter = MappingCharFilter::new([("", "x"), ("b", "c")]).unwrap();
        assert_eq!(filter.len(), 1);
        assert_eq!(filter.filter("abc"), "acc");
    }

    #[test]
    fn test_mapping_empty_table_is_identity() {
        let filter = MappingCharFilter::new(Vec::<(String, String)>::new()).unwrap();
        assert!(filter.is_empty());
        assert_eq!(filter.filter("unchanged"), "unchanged");
    }
}
