//! Error types for the lotnorm library.
//!
//! Normalization itself never fails: every operation on text is total. Errors
//! only arise while building a normalizer (compiling patterns, building the
//! transliteration automaton), while loading configuration, and in the CLI.
//! All of them are represented by the [`LotnormError`] enum.
//!
//! # Examples
//!
//! ```
//! use lotnorm::error::{LotnormError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LotnormError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lotnorm operations.
///
/// Uses the `thiserror` crate for the `Error` implementation and provides
/// constructor helpers for the string-carrying variants.
#[derive(Error, Debug)]
pub enum LotnormError {
    /// I/O errors (reading configuration files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (unreadable or inconsistent settings)
    #[error("Config error: {0}")]
    Config(String),

    /// Analysis errors (pattern compilation, automaton construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LotnormError.
pub type Result<T> = std::result::Result<T, LotnormError>;

impl LotnormError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LotnormError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LotnormError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LotnormError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LotnormError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LotnormError::config("missing separator");
        assert_eq!(error.to_string(), "Config error: missing separator");

        let error = LotnormError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = LotnormError::invalid_argument("min length");
        assert_eq!(error.to_string(), "Error: Invalid argument: min length");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LotnormError::from(io_error);

        match error {
            LotnormError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = LotnormError::from(json_error);
        assert!(matches!(error, LotnormError::Json(_)));
    }
}
