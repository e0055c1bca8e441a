//! # Corpus Crate
//!
//! Loads the word list that every filter chain starts from.
//!
//! ## Main Components
//!
//! - **types**: `Word` and `Corpus`
//! - **parser**: read newline-delimited word lists from readers or files
//! - **error**: error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use corpus::Corpus;
//! use std::path::Path;
//!
//! let corpus = Corpus::load_from_file(Path::new("five_letter_words.txt"))?;
//! println!("{} words", corpus.len());
//! ```

pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{CorpusError, Result};
pub use parser::{load_from_file, parse_lines};
pub use types::{Corpus, Word};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_creation() {
        let corpus = Corpus::default();
        assert!(corpus.is_empty());
        assert_eq!(corpus.len(), 0);
        assert!(corpus.candidates().is_empty());
    }

    #[test]
    fn test_candidates_are_an_independent_copy() {
        let corpus = Corpus::from_words(["crane", "trace"]);
        let mut candidates = corpus.candidates();
        candidates.pop();

        assert_eq!(candidates.len(), 1);
        assert_eq!(corpus.len(), 2);
    }
}
