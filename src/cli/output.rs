//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::extractor::ExtractionResult;
use crate::analysis::normalizer::QueryAnalysis;
use crate::cli::args::{LotnormArgs, OutputFormat};
use crate::error::Result;

/// Result of commands that produce a single text.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextResult {
    pub text: String,
}

/// Result of lot number extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct LotNumbersResult {
    pub lot_numbers: Vec<String>,
    pub remainder: String,
}

impl From<ExtractionResult> for LotNumbersResult {
    fn from(result: ExtractionResult) -> Self {
        LotNumbersResult {
            lot_numbers: result.identifiers,
            remainder: result.remainder,
        }
    }
}

/// Result of item number extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemNumbersResult {
    pub item_numbers: Vec<String>,
}

/// Plain-text rendering of a result.
pub trait HumanReadable {
    fn to_human(&self) -> String;
}

impl HumanReadable for TextResult {
    fn to_human(&self) -> String {
        self.text.clone()
    }
}

impl HumanReadable for LotNumbersResult {
    fn to_human(&self) -> String {
        format!(
            "Lot numbers: {}\nRemainder: {}",
            self.lot_numbers.join(", "),
            self.remainder
        )
    }
}

impl HumanReadable for ItemNumbersResult {
    fn to_human(&self) -> String {
        self.item_numbers.join(", ")
    }
}

impl HumanReadable for QueryAnalysis {
    fn to_human(&self) -> String {
        format!(
            "Lot numbers: {}\nItem numbers: {}\nTerms: {}",
            self.lot_numbers.join(", "),
            self.item_numbers.join(", "),
            self.terms
        )
    }
}

/// Render one result in the requested format.
pub fn format_result<T: Serialize + HumanReadable>(result: &T, args: &LotnormArgs) -> Result<String> {
    Ok(match args.output_format {
        OutputFormat::Human => result.to_human(),
        OutputFormat::Json if args.pretty => serde_json::to_string_pretty(result)?,
        OutputFormat::Json => serde_json::to_string(result)?,
    })
}

/// Print results, one per input line.
pub fn output_results<T: Serialize + HumanReadable>(results: &[T], args: &LotnormArgs) -> Result<()> {
    for result in results {
        println!("{}", format_result(result, args)?);
    }
    Ok(())
}
