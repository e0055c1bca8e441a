//! Filter to drop words containing any of the given letters.

use crate::error::Result;
use crate::scan::retain_words;
use crate::traits::Filter;
use corpus::Word;

/// Keeps candidates that contain none of `letters`.
///
/// A single matching letter anywhere in the word disqualifies it.
pub struct NotContainsFilter {
    letters: String,
}

impl NotContainsFilter {
    pub fn new(letters: impl Into<String>) -> Self {
        Self {
            letters: letters.into(),
        }
    }
}

fn has_none(word: &Word, letters: &str) -> bool {
    !letters.chars().any(|letter| word.contains_char(letter))
}

fn retain_lacking(candidates: Vec<Word>, letters: &str) -> Vec<Word> {
    retain_words(candidates, |word| has_none(word, letters))
}

/// Words from `candidates` containing none of `letters`
pub fn not_contains(candidates: &[Word], letters: &str) -> Vec<Word> {
    retain_lacking(candidates.to_vec(), letters)
}

impl Filter for NotContainsFilter {
    fn name(&self) -> &str {
        "not_contains"
    }

    fn apply(&self, candidates: Vec<Word>) -> Result<Vec<Word>> {
        Ok(retain_lacking(candidates, &self.letters))
    }
}
