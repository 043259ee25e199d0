//! # lotnorm
//!
//! Search index text normalization for auction listings.
//!
//! ## Features
//!
//! - Lot number extraction (prefix, number, extension) with configurable separators
//! - Item number extraction
//! - Accent folding, tag stripping and entity decoding
//! - Canonical, deduplicated, stopword-filtered index text
//!
//! ## Example
//!
//! ```
//! use lotnorm::prelude::*;
//!
//! let normalizer = TextNormalizer::new(NormalizerConfig::default()).unwrap();
//!
//! let lots = normalizer.extract_lot_numbers("lot 45 and lot 46");
//! assert_eq!(lots.identifiers, vec!["45", "46"]);
//! assert_eq!(lots.remainder, "lot  and lot");
//!
//! assert_eq!(normalizer.filter("Café-Bar &amp; Grill"), "cafebar grill");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;

pub mod prelude {
    pub use crate::analysis::extractor::ExtractionResult;
    pub use crate::analysis::normalizer::{QueryAnalysis, TextNormalizer};
    pub use crate::config::{NormalizerConfig, SeparatorConfig};
    pub use crate::error::{LotnormError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
