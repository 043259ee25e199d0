//! Filters applied to already-canonicalized token text.
//!
//! - [`stop::StopWordFilter`] - Language-keyed stopword removal

pub mod stop;

pub use stop::{StopWordFilter, StopWordProvider};
