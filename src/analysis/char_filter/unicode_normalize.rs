//! Unicode normalization char filter.

use unicode_normalization::{IsNormalized, UnicodeNormalization, is_nfc_quick};

use super::CharFilter;

/// Supported Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizationForm {
    /// Canonical composition. Keeps compatibility characters such as `ﬁ` as written.
    #[default]
    NFC,
    /// Canonical decomposition.
    NFD,
}

/// A char filter that brings text into one Unicode normalization form.
///
/// The accent folding table is written for precomposed letters, so text is
/// composed with NFC before folding: `e` + U+0301 and `é` fold identically.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeNormalizeCharFilter {
    form: NormalizationForm,
}

impl UnicodeNormalizeCharFilter {
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }

    pub fn form(&self) -> NormalizationForm {
        self.form
    }
}

impl CharFilter for UnicodeNormalizeCharFilter {
    fn filter(&self, input: &str) -> String {
        match self.form {
            NormalizationForm::NFC => match is_nfc_quick(input.chars()) {
                IsNormalized::Yes => input.to_string(),
                _ => input.nfc().collect(),
            },
            NormalizationForm::NFD => input.nfd().collect(),
        }
    }

    fn name(&self) -> &'static str {
        "unicode_normalize"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfc_composes_combining_marks() {
        let filter = UnicodeNormalizeCharFilter::new(NormalizationForm::NFC);
        assert_eq!(filter.filter("Cre\u{0300}me"), "Cr\u{00E8}me");
        assert_eq!(filter.filter("Bru\u{0302}le\u{0301}e"), "Br\u{00FB}l\u{00E9}e");
        // already composed text is returned as is
        assert_eq!(filter.filter("Am\u{00E9}lie"), "Am\u{00E9}lie");
    }

    #[test]
    fn test_nfc_keeps_compatibility_characters() {
        let filter = UnicodeNormalizeCharFilter::default();
        assert_eq!(filter.form(), NormalizationForm::NFC);
        assert_eq!(filter.filter("\u{FB01}ne \u{FF21}"), "\u{FB01}ne \u{FF21}");
    }

    #[test]
    fn test_nfd_decomposes() {
        let filter = UnicodeNormalizeCharFilter::new(NormalizationForm::NFD);
        assert_eq!(filter.filter("\u{00E9}"), "e\u{0301}");
    }
}
