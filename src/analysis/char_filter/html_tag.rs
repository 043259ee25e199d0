//! HTML tag stripping char filter.
//!
//! This is not an HTML parser. Tags are removed by pattern, without balancing
//! and without understanding quoted attribute values. It is meant for
//! WYSIWYG-authored listing descriptions, not adversarial markup.

use regex::Regex;

use super::CharFilter;
use crate::error::{LotnormError, Result};

const START_TAG_PATTERN: &str = r"<\s*\w.*?>";
const END_TAG_PATTERN: &str = r"<\s*/\s*\w\s*.*?>|<\s*br\s*>";
const WHITESPACE_PATTERN: &str = r"\s+";

/// Replaces start and end tags with a space and collapses whitespace runs.
#[derive(Clone, Debug)]
pub struct HtmlTagCharFilter {
    start_tag: Regex,
    end_tag: Regex,
    whitespace: Regex,
}

impl HtmlTagCharFilter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            start_tag: compile(START_TAG_PATTERN)?,
            end_tag: compile(END_TAG_PATTERN)?,
            whitespace: compile(WHITESPACE_PATTERN)?,
        })
    }

    /// Strip tags from `text`. Leading and trailing space is kept (collapsed).
    pub fn strip_tags(&self, text: &str) -> String {
        let text = self.start_tag.replace_all(text, " ");
        let text = self.end_tag.replace_all(&text, " ");
        self.whitespace.replace_all(&text, " ").into_owned()
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| LotnormError::analysis(format!("tag pattern: {e}")))
}

impl CharFilter for HtmlTagCharFilter {
    fn filter(&self, input: &str) -> String {
        self.strip_tags(input)
    }

    fn name(&self) -> &'static str {
        "html_tag"
    }
}
