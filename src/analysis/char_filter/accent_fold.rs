//! Accent folding char filter.
//!
//! Transliterates accented Latin letters to their base ASCII letter using a
//! static table. Both upper- and lowercase sources fold to the lowercase base
//! letter; the pipeline lowercases everything later anyway.
//!
//! Input is composed to NFC before the table is applied, so decomposed
//! sequences such as `e` + U+0301 fold the same way as `é`.
//!
//! The table is data, not behavior: locale-specific foldings can be supplied
//! through [`AccentFoldCharFilter::with_table`] without touching the pipeline.
//!
//! # Examples
//!
//! ```
//! use lotnorm::analysis::char_filter::CharFilter;
//! use lotnorm::analysis::char_filter::accent_fold::AccentFoldCharFilter;
//!
//! let filter = AccentFoldCharFilter::new().unwrap();
//! assert_eq!(filter.filter("Crème brûlée"), "Creme brulee");
//! ```

use super::CharFilter;
use super::mapping::MappingCharFilter;
use super::unicode_normalize::{NormalizationForm, UnicodeNormalizeCharFilter};
use crate::error::Result;

/// Default transliteration table, authored against precomposed (NFC) text.
///
/// Target letters and the number of sources per letter match the table the
/// existing index was built with. Letters outside it (`ł`, `ß`, `ń`, ...) are
/// left for tokenization as they are. Some sources have no counterpart in the
/// other case (`đ` folds, `Đ` does not); those entries are kept as they are.
#[rustfmt::skip]
pub static TRANSLITERATION_TABLE: &[(&str, &str)] = &[
    // a
    ("à", "a"), ("á", "a"), ("â", "a"), ("ã", "a"), ("ä", "a"), ("å", "a"),
    ("ā", "a"), ("ă", "a"), ("ą", "a"),
    ("À", "a"), ("Á", "a"), ("Â", "a"), ("Ã", "a"), ("Ä", "a"), ("Å", "a"),
    ("Ā", "a"), ("Ă", "a"), ("Ą", "a"),
    // e
    ("è", "e"), ("é", "e"), ("ê", "e"), ("ë", "e"), ("ē", "e"), ("ę", "e"), ("ě", "e"),
    ("È", "e"), ("É", "e"), ("Ê", "e"), ("Ë", "e"), ("Ē", "e"), ("Ę", "e"),
    // i
    ("ì", "i"), ("í", "i"), ("î", "i"), ("ï", "i"), ("ī", "i"), ("į", "i"), ("ı", "i"),
    ("Ì", "i"), ("Í", "i"), ("Î", "i"), ("Ï", "i"), ("Ī", "i"), ("Į", "i"),
    // o
    ("ò", "o"), ("ó", "o"), ("ô", "o"), ("õ", "o"), ("ö", "o"), ("ø", "o"),
    ("ō", "o"), ("ŏ", "o"), ("ő", "o"),
    ("Ò", "o"), ("Ó", "o"), ("Ô", "o"), ("Õ", "o"), ("Ö", "o"), ("Ø", "o"),
    ("Ō", "o"), ("Ő", "o"),
    // u
    ("ù", "u"), ("ú", "u"), ("û", "u"), ("ü", "u"), ("ū", "u"), ("ů", "u"),
    ("ű", "u"), ("ų", "u"),
    ("Ù", "u"), ("Ú", "u"), ("Û", "u"), ("Ü", "u"), ("Ū", "u"), ("Ů", "u"),
    ("Ű", "u"), ("Ų", "u"),
    // c
    ("ç", "c"), ("ć", "c"), ("č", "c"), ("Ç", "c"), ("Ć", "c"), ("Č", "c"),
    // g
    ("ĝ", "g"), ("ğ", "g"), ("ģ", "g"), ("Ĝ", "g"), ("Ğ", "g"), ("Ģ", "g"),
    // h
    ("ĥ", "h"), ("Ĥ", "h"),
    // d
    ("ď", "d"), ("đ", "d"), ("Ď", "d"),
    // j
    ("ĵ", "j"), ("Ĵ", "j"),
    // n
    ("ñ", "n"), ("Ñ", "n"),
    // r
    ("ř", "r"), ("Ř", "r"),
    // s
    ("ś", "s"), ("ş", "s"), ("š", "s"), ("Ś", "s"), ("Ş", "s"), ("Š", "s"),
    // t
    ("ţ", "t"), ("ť", "t"), ("ț", "t"), ("Ţ", "t"), ("Ť", "t"), ("Ț", "t"),
    // y
    ("ý", "y"), ("ÿ", "y"), ("ỳ", "y"), ("Ỳ", "y"),
    ("Ý", "y"), ("Ÿ", "y"), ("ŷ", "y"), ("Ŷ", "y"),
    // w
    ("ŵ", "w"), ("ẁ", "w"), ("ẃ", "w"), ("ẅ", "w"),
    ("Ŵ", "w"), ("Ẁ", "w"), ("Ẃ", "w"), ("Ẅ", "w"),
    // z
    ("ž", "z"), ("Ž", "z"),
];

/// A char filter that folds accented letters to plain ASCII letters.
pub struct AccentFoldCharFilter {
    compose: UnicodeNormalizeCharFilter,
    mapping: MappingCharFilter,
}

impl AccentFoldCharFilter {
    /// Create an accent folder over [`TRANSLITERATION_TABLE`].
    pub fn new() -> Result<Self> {
        Self::with_table(TRANSLITERATION_TABLE.iter().copied())
    }

    /// Create an accent folder over a custom table.
    ///
    /// Keys may span several characters; the longest key wins at each position.
    /// Keys are matched against NFC text, so decomposed keys never match.
    pub fn with_table<I, K, V>(table: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Ok(Self {
            compose: UnicodeNormalizeCharFilter::new(NormalizationForm::NFC),
            mapping: MappingCharFilter::new(table)?,
        })
    }

    /// Compose `text` to NFC, then fold it in a single pass.
    pub fn fold(&self, text: &str) -> String {
        self.mapping.filter(&self.compose.filter(text))
    }
}

impl CharFilter for AccentFoldCharFilter {
    fn filter(&self, input: &str) -> String {
        self.fold(input)
    }

    fn name(&self) -> &'static str {
        "accent_fold"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_lowercase_and_uppercase() {
        let filter = AccentFoldCharFilter::new().unwrap();
        assert_eq!(filter.fold("àéîõü"), "aeiou");
        assert_eq!(filter.fold("ÀÉÎÕÜ"), "aeiou");
        assert_eq!(filter.fold("Ẃŷž"), "wyz");
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        let filter = AccentFoldCharFilter::new().unwrap();
        assert_eq!(filter.fold("Lot 12: Ölgemälde, 東京"), "Lot 12: olgemalde, 東京");
        assert_eq!(filter.fold(""), "");
    }

    #[test]
    fn test_table_has_unique_keys() {
        let mut keys: Vec<&str> = TRANSLITERATION_TABLE.iter().map(|(k, _)| *k).collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_table_targets_and_counts() {
        let count = |target: &str| {
            TRANSLITERATION_TABLE
                .iter()
                .filter(|(_, v)| *v == target)
                .count()
        };
        let expected = [
            ("a", 18), ("e", 13), ("i", 13), ("o", 17), ("u", 16), ("c", 6), ("g", 6),
            ("h", 2), ("d", 3), ("j", 2), ("n", 2), ("r", 2), ("s", 6), ("t", 6),
            ("y", 8), ("w", 8), ("z", 2),
        ];
        for (target, n) in expected {
            assert_eq!(count(target), n, "sources for {target:?}");
        }
        let total: usize = expected.iter().map(|(_, n)| n).sum();
        assert_eq!(TRANSLITERATION_TABLE.len(), total);
    }

    #[test]
    fn test_letters_outside_table_are_kept() {
        let filter = AccentFoldCharFilter::new().unwrap();
        assert_eq!(filter.fold("Łódź"), "Łodź");
        assert_eq!(filter.fold("Straße ķ Đ"), "Straße ķ Đ");
    }

    #[test]
    fn test_table_targets_are_ascii() {
        assert!(
            TRANSLITERATION_TABLE
                .iter()
                .all(|(_, v)| v.chars().all(|c| c.is_ascii_lowercase()))
        );
    }

    #[test]
    fn test_custom_table_prefers_longer_keys() {
        let filter =
            AccentFoldCharFilter::with_table([("ĳs", "ys"), ("ĳ", "ij"), ("æ", "ae")]).unwrap();
        assert_eq!(filter.fold("ĳsĳ"), "ysij");
        assert_eq!(filter.fold("æther"), "aether");
    }

    #[test]
    fn test_decomposed_input_folds_like_precomposed() {
        let filter = AccentFoldCharFilter::new().unwrap();
        let precomposed = "Cr\u{00E8}me Br\u{00FB}l\u{00E9}e";
        let decomposed = "Cre\u{0300}me Bru\u{0302}le\u{0301}e";
        assert_eq!(filter.fold(decomposed), "Creme Brulee");
        assert_eq!(filter.fold(decomposed), filter.fold(precomposed));
        // a base letter with a mark the table has no composed entry for keeps the mark
        assert_eq!(filter.fold("q\u{0301}"), "q\u{0301}");
    }
}
