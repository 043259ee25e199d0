//! Character reference decoding.
//!
//! Listing descriptions saved through a WYSIWYG editor often carry entities
//! such as `&auml;` or `&#8364;`. [`HtmlEntityDecoder`] turns named, decimal
//! and hexadecimal references back into literal characters. Quote references
//! (`&quot;`, `&#34;`, `&#39;` and their hex forms) are left encoded.
//!
//! Anything the decoder does not recognize is copied through as written.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::CharFilter;
use crate::error::{LotnormError, Result};

/// Decodes character references into literal text.
///
/// The normalizer calls this once per `filter` invocation. Implementations
/// must be pure and thread-safe.
pub trait EntityDecoder: Send + Sync {
    /// Decode all character references in `text`.
    fn decode(&self, text: &str) -> String;
}

/// HTML 4 names for U+00A0 through U+00FF, in code point order.
#[rustfmt::skip]
const LATIN1_ENTITY_NAMES: [&str; 96] = [
    "nbsp", "iexcl", "cent", "pound", "curren", "yen", "brvbar", "sect",
    "uml", "copy", "ordf", "laquo", "not", "shy", "reg", "macr",
    "deg", "plusmn", "sup2", "sup3", "acute", "micro", "para", "middot",
    "cedil", "sup1", "ordm", "raquo", "frac14", "frac12", "frac34", "iquest",
    "Agrave", "Aacute", "Acirc", "Atilde", "Auml", "Aring", "AElig", "Ccedil",
    "Egrave", "Eacute", "Ecirc", "Euml", "Igrave", "Iacute", "Icirc", "Iuml",
    "ETH", "Ntilde", "Ograve", "Oacute", "Ocirc", "Otilde", "Ouml", "times",
    "Oslash", "Ugrave", "Uacute", "Ucirc", "Uuml", "Yacute", "THORN", "szlig",
    "agrave", "aacute", "acirc", "atilde", "auml", "aring", "aelig", "ccedil",
    "egrave", "eacute", "ecirc", "euml", "igrave", "iacute", "icirc", "iuml",
    "eth", "ntilde", "ograve", "oacute", "ocirc", "otilde", "ouml", "divide",
    "oslash", "ugrave", "uacute", "ucirc", "uuml", "yacute", "thorn", "yuml",
];

/// Greek capitals U+0391 through U+03A9; U+03A2 is unassigned and skipped.
#[rustfmt::skip]
const GREEK_UPPER_ENTITY_NAMES: [&str; 24] = [
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta",
    "Iota", "Kappa", "Lambda", "Mu", "Nu", "Xi", "Omicron", "Pi",
    "Rho", "Sigma", "Tau", "Upsilon", "Phi", "Chi", "Psi", "Omega",
];

/// Greek small letters U+03B1 through U+03C9, final sigma included.
#[rustfmt::skip]
const GREEK_LOWER_ENTITY_NAMES: [&str; 25] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta",
    "iota", "kappa", "lambda", "mu", "nu", "xi", "omicron", "pi",
    "rho", "sigmaf", "sigma", "tau", "upsilon", "phi", "chi", "psi", "omega",
];

/// Remaining HTML 4.01 names. `quot` is absent so quotes stay encoded.
#[rustfmt::skip]
const OTHER_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'), ("lt", '<'), ("gt", '>'),
    ("OElig", '\u{0152}'), ("oelig", '\u{0153}'),
    ("Scaron", '\u{0160}'), ("scaron", '\u{0161}'), ("Yuml", '\u{0178}'),
    ("fnof", '\u{0192}'), ("circ", '\u{02C6}'), ("tilde", '\u{02DC}'),
    ("thetasym", '\u{03D1}'), ("upsih", '\u{03D2}'), ("piv", '\u{03D6}'),
    // general punctuation
    ("ensp", '\u{2002}'), ("emsp", '\u{2003}'), ("thinsp", '\u{2009}'),
    ("zwnj", '\u{200C}'), ("zwj", '\u{200D}'), ("lrm", '\u{200E}'), ("rlm", '\u{200F}'),
    ("ndash", '\u{2013}'), ("mdash", '\u{2014}'),
    ("lsquo", '\u{2018}'), ("rsquo", '\u{2019}'), ("sbquo", '\u{201A}'),
    ("ldquo", '\u{201C}'), ("rdquo", '\u{201D}'), ("bdquo", '\u{201E}'),
    ("dagger", '\u{2020}'), ("Dagger", '\u{2021}'), ("bull", '\u{2022}'),
    ("hellip", '\u{2026}'), ("permil", '\u{2030}'), ("prime", '\u{2032}'),
    ("Prime", '\u{2033}'), ("lsaquo", '\u{2039}'), ("rsaquo", '\u{203A}'),
    ("oline", '\u{203E}'), ("frasl", '\u{2044}'), ("euro", '\u{20AC}'),
    // letterlike symbols
    ("image", '\u{2111}'), ("weierp", '\u{2118}'), ("real", '\u{211C}'),
    ("trade", '\u{2122}'), ("alefsym", '\u{2135}'),
    // arrows
    ("larr", '\u{2190}'), ("uarr", '\u{2191}'), ("rarr", '\u{2192}'), ("darr", '\u{2193}'),
    ("harr", '\u{2194}'), ("crarr", '\u{21B5}'),
    ("lArr", '\u{21D0}'), ("uArr", '\u{21D1}'), ("rArr", '\u{21D2}'), ("dArr", '\u{21D3}'),
    ("hArr", '\u{21D4}'),
    // mathematical operators
    ("forall", '\u{2200}'), ("part", '\u{2202}'), ("exist", '\u{2203}'), ("empty", '\u{2205}'),
    ("nabla", '\u{2207}'), ("isin", '\u{2208}'), ("notin", '\u{2209}'), ("ni", '\u{220B}'),
    ("prod", '\u{220F}'), ("sum", '\u{2211}'), ("minus", '\u{2212}'), ("lowast", '\u{2217}'),
    ("radic", '\u{221A}'), ("prop", '\u{221D}'), ("infin", '\u{221E}'), ("ang", '\u{2220}'),
    ("and", '\u{2227}'), ("or", '\u{2228}'), ("cap", '\u{2229}'), ("cup", '\u{222A}'),
    ("int", '\u{222B}'), ("there4", '\u{2234}'), ("sim", '\u{223C}'), ("cong", '\u{2245}'),
    ("asymp", '\u{2248}'), ("ne", '\u{2260}'), ("equiv", '\u{2261}'), ("le", '\u{2264}'),
    ("ge", '\u{2265}'), ("sub", '\u{2282}'), ("sup", '\u{2283}'), ("nsub", '\u{2284}'),
    ("sube", '\u{2286}'), ("supe", '\u{2287}'), ("oplus", '\u{2295}'), ("otimes", '\u{2297}'),
    ("perp", '\u{22A5}'), ("sdot", '\u{22C5}'),
    // miscellaneous technical and shapes
    ("lceil", '\u{2308}'), ("rceil", '\u{2309}'), ("lfloor", '\u{230A}'), ("rfloor", '\u{230B}'),
    ("lang", '\u{2329}'), ("rang", '\u{232A}'), ("loz", '\u{25CA}'),
    ("spades", '\u{2660}'), ("clubs", '\u{2663}'), ("hearts", '\u{2665}'), ("diams", '\u{2666}'),
];

/// Named entity table: every HTML 4.01 name except `quot`.
pub static NAMED_ENTITIES: LazyLock<HashMap<&'static str, char>> = LazyLock::new(|| {
    let latin1 = LATIN1_ENTITY_NAMES.iter().zip('\u{00A0}'..='\u{00FF}');
    let greek_upper = GREEK_UPPER_ENTITY_NAMES
        .iter()
        .zip(('\u{0391}'..='\u{03A9}').filter(|c| *c != '\u{03A2}'));
    let greek_lower = GREEK_LOWER_ENTITY_NAMES.iter().zip('\u{03B1}'..='\u{03C9}');

    latin1
        .chain(greek_upper)
        .chain(greek_lower)
        .map(|(&name, c)| (name, c))
        .chain(OTHER_ENTITIES.iter().copied())
        .collect()
});

const ENTITY_PATTERN: &str = r"&(?:#([0-9]{1,7})|#[xX]([0-9a-fA-F]{1,6})|([A-Za-z][A-Za-z0-9]{1,31}));";

/// The default [`EntityDecoder`].
#[derive(Clone, Debug)]
pub struct HtmlEntityDecoder {
    pattern: Regex,
}

impl HtmlEntityDecoder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(ENTITY_PATTERN)
                .map_err(|e| LotnormError::analysis(format!("entity pattern: {e}")))?,
        })
    }

    fn resolve(caps: &Captures<'_>) -> Option<char> {
        let code_point = if let Some(dec) = caps.get(1) {
            dec.as_str().parse::<u32>().ok()?
        } else if let Some(hex) = caps.get(2) {
            u32::from_str_radix(hex.as_str(), 16).ok()?
        } else {
            let name = caps.get(3)?.as_str();
            return NAMED_ENTITIES.get(name).copied();
        };

        match code_point {
            0 | 0x22 | 0x27 => None,
            cp => char::from_u32(cp),
        }
    }
}

impl EntityDecoder for HtmlEntityDecoder {
    fn decode(&self, text: &str) -> String {
        if !text.contains('&') {
            return text.to_string();
        }
        self.pattern
            .replace_all(text, |caps: &Captures<'_>| match Self::resolve(caps) {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

impl CharFilter for HtmlEntityDecoder {
    fn filter(&self, input: &str) -> String {
        self.decode(input)
    }

    fn name(&self) -> &'static str {
        "html_entity"
    }
}
