//! Filter to keep words with letters fixed at known positions.
//!
//! Used for letters confirmed in place, e.g. `_r__e` keeps only words with
//! 'r' second and 'e' last.

use crate::error::Result;
use crate::pattern::Pattern;
use crate::scan::retain_words;
use crate::traits::Filter;
use corpus::Word;

/// Keeps candidates that agree with every pinned letter of the pattern.
///
/// ## Algorithm
/// 1. Reject the step if any candidate's length differs from the pattern's
/// 2. Keep a word if, at each position, the pattern is `_` or equals the word's letter
pub struct LettersInPositionFilter {
    pattern: Pattern,
}

impl LettersInPositionFilter {
    pub fn new(pattern: impl Into<Pattern>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

fn retain_matching(candidates: Vec<Word>, pattern: &Pattern) -> Result<Vec<Word>> {
    pattern.check_fits(&candidates)?;
    Ok(retain_words(candidates, |word| pattern.matches(word)))
}

/// Words from `candidates` matching `pattern` at every pinned position
pub fn letters_in_position(candidates: &[Word], pattern: &Pattern) -> Result<Vec<Word>> {
    retain_matching(candidates.to_vec(), pattern)
}

impl Filter for LettersInPositionFilter {
    fn name(&self) -> &str {
        "letters_in_position"
    }

    fn apply(&self, candidates: Vec<Word>) -> Result<Vec<Word>> {
        retain_matching(candidates, &self.pattern)
    }
}
