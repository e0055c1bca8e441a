//! Error types for the filter pipeline.

use thiserror::Error;

/// Errors raised while running a filter step.
///
/// Any error aborts the rest of the chain; steps are never skipped silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A position pattern does not have the same length as a candidate word
    #[error(
        "Pattern '{pattern}' has {pattern_len} positions but '{word}' has {word_len} letters"
    )]
    InvalidPattern {
        pattern: String,
        pattern_len: usize,
        word: String,
        word_len: usize,
    },
}

pub type Result<T> = std::result::Result<T, FilterError>;
