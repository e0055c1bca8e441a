//! Filter to keep words that contain every given letter.
//!
//! Letters are checked for presence only: repeating a letter in the search
//! string adds no constraint, so "ee" behaves exactly like "e".

use crate::error::Result;
use crate::scan::retain_words;
use crate::traits::Filter;
use corpus::Word;

/// Keeps candidates containing every letter of `letters`, anywhere.
pub struct ContainsFilter {
    letters: String,
}

impl ContainsFilter {
    pub fn new(letters: impl Into<String>) -> Self {
        Self {
            letters: letters.into(),
        }
    }
}

fn has_all(word: &Word, letters: &str) -> bool {
    letters.chars().all(|letter| word.contains_char(letter))
}

fn retain_containing(candidates: Vec<Word>, letters: &str) -> Vec<Word> {
    retain_words(candidates, |word| has_all(word, letters))
}

/// Words from `candidates` containing every letter of `letters`
pub fn contains(candidates: &[Word], letters: &str) -> Vec<Word> {
    retain_containing(candidates.to_vec(), letters)
}

impl Filter for ContainsFilter {
    fn name(&self) -> &str {
        "contains"
    }

    fn apply(&self, candidates: Vec<Word>) -> Result<Vec<Word>> {
        Ok(retain_containing(candidates, &self.letters))
    }
}
