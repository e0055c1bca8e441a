//! Error types for the corpus crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a word list
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The word list could not be opened or read.
    ///
    /// Always fatal: nothing can be filtered without a corpus.
    #[error("Word list unavailable: {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while reading from a source that has no path
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CorpusError>;
