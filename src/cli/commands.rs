//! Command implementations for the lotnorm CLI.

use std::io::{self, BufRead};

use rayon::prelude::*;

use crate::analysis::normalizer::TextNormalizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::NormalizerConfig;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: LotnormArgs) -> Result<()> {
    let normalizer = TextNormalizer::new(build_config(&args)?)?;

    match &args.command {
        Command::Filter(text_args) => {
            let results: Vec<TextResult> = normalizer
                .filter_batch(&read_inputs(text_args)?)
                .into_iter()
                .map(|text| TextResult { text })
                .collect();
            output_results(&results, &args)
        }
        Command::LotNumbers(text_args) => {
            let results: Vec<LotNumbersResult> = map_inputs(&read_inputs(text_args)?, |text| {
                normalizer.extract_lot_numbers(text).into()
            });
            output_results(&results, &args)
        }
        Command::ItemNumbers(text_args) => {
            let results = map_inputs(&read_inputs(text_args)?, |text| ItemNumbersResult {
                item_numbers: normalizer.extract_item_numbers(text),
            });
            output_results(&results, &args)
        }
        Command::Unique(text_args) => {
            let results = map_inputs(&read_inputs(text_args)?, |text| TextResult {
                text: normalizer.filter_to_unique_sorted_text(text),
            });
            output_results(&results, &args)
        }
        Command::MinLength(min_args) => {
            let results = map_inputs(&read_inputs(&min_args.input)?, |text| TextResult {
                text: normalizer.filter_by_min_length(text, min_args.min_length),
            });
            output_results(&results, &args)
        }
        Command::Index(min_args) => {
            let results = map_inputs(&read_inputs(&min_args.input)?, |text| TextResult {
                text: normalizer.index_text(text, min_args.min_length),
            });
            output_results(&results, &args)
        }
        Command::Query(text_args) => {
            let results = map_inputs(&read_inputs(text_args)?, |text| {
                normalizer.analyze_query(text)
            });
            output_results(&results, &args)
        }
    }
}

/// Apply `f` to every input line in parallel, keeping input order.
fn map_inputs<T, F>(inputs: &[String], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&str) -> T + Sync + Send,
{
    inputs.par_iter().map(|text| f(text.as_str())).collect()
}

/// Load the config file, if any, then apply flag and environment overrides.
pub fn build_config(args: &LotnormArgs) -> Result<NormalizerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading config from: {}", path.display());
            NormalizerConfig::from_file(path)?
        }
        None => NormalizerConfig::default(),
    };

    if let Some(prefix) = &args.prefix_separator {
        config.separators.prefix = prefix.clone();
    }
    if let Some(extension) = &args.extension_separator {
        config.separators.extension = extension.clone();
    }
    if let Some(language) = &args.language {
        config.index_language = language.clone();
    }

    log::debug!("Effective config: {config:?}");
    Ok(config)
}

/// The text argument, or every stdin line when it is absent.
fn read_inputs(text_args: &TextArgs) -> Result<Vec<String>> {
    if let Some(text) = &text_args.text {
        return Ok(vec![text.clone()]);
    }

    let stdin = io::stdin();
    let lines = stdin.lock().lines().collect::<io::Result<Vec<_>>>()?;
    log::info!("Read {} lines from stdin", lines.len());
    Ok(lines)
}
