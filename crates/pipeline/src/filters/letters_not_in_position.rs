//! Filter for letters known to be in the word but not at a given position.
//!
//! Each pattern records one guess's misplaced letters, e.g. `r____` for an
//! 'r' that was present but not first. Several patterns can be supplied at
//! once, one per earlier guess.

use crate::error::Result;
use crate::pattern::Pattern;
use crate::scan::retain_words;
use crate::traits::Filter;
use corpus::Word;

/// Keeps candidates that every pattern misses.
///
/// A pattern misses a word when none of its pinned letters sits at the same
/// position in the word. With no patterns every word is kept.
pub struct LettersNotInPositionFilter {
    patterns: Vec<Pattern>,
}

impl LettersNotInPositionFilter {
    pub fn new<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Pattern>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

fn missed_by_all(word: &Word, patterns: &[Pattern]) -> bool {
    patterns.iter().all(|pattern| pattern.misses(word))
}

fn retain_missed(candidates: Vec<Word>, patterns: &[Pattern]) -> Result<Vec<Word>> {
    for pattern in patterns {
        pattern.check_fits(&candidates)?;
    }
    Ok(retain_words(candidates, |word| missed_by_all(word, patterns)))
}

/// Words from `candidates` that no pattern hits at a pinned position
pub fn letters_not_in_position(candidates: &[Word], patterns: &[Pattern]) -> Result<Vec<Word>> {
    retain_missed(candidates.to_vec(), patterns)
}

impl Filter for LettersNotInPositionFilter {
    fn name(&self) -> &str {
        "letters_not_in_position"
    }

    fn apply(&self, candidates: Vec<Word>) -> Result<Vec<Word>> {
        retain_missed(candidates, &self.patterns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::from(*w)).collect()
    }

    #[test]
    fn test_letters_not_in_position_filter() {
        let candidates = words(&["crane", "trace"]);

        let filtered = LettersNotInPositionFilter::new(["r____"]).apply(candidates).unwrap();

        assert_eq!(filtered, vec!["crane", "trace"]);
    }

    #[test]
    fn test_any_hitting_pattern_discards() {
        let candidates = words(&["crane", "trace", "grape", "plate"]);

        // 'a' not third rules out everything with 'a' at index 2
        let filtered = LettersNotInPositionFilter::new(["__a__"]).apply(candidates.clone()).unwrap();
        assert!(filtered.is_empty());

        // 'c' not first, 'e' not fourth
        let filtered = letters_not_in_position(
            &candidates,
            &[Pattern::parse("c____"), Pattern::parse("___e_")],
        )
        .unwrap();
        assert_eq!(filtered, vec!["trace", "grape", "plate"]);
    }

    #[test]
    fn test_pattern_must_miss_every_pinned_letter() {
        // a hit on either pinned letter discards the word
        let candidates = words(&["crane", "caper", "trace", "plate"]);

        let filtered = letters_not_in_position(&candidates, &[Pattern::parse("cr___")]).unwrap();

        assert_eq!(filtered, vec!["plate"]);
    }

    #[test]
    fn test_no_patterns_keeps_everything() {
        let candidates = words(&["crane", "trace"]);

        let filter = LettersNotInPositionFilter::new(Vec::<Pattern>::new());
        let filtered = filter.apply(candidates.clone()).unwrap();

        assert!(filter.patterns().is_empty());
        assert_eq!(filtered, candidates);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let candidates = words(&["crane"]);

        let err = LettersNotInPositionFilter::new(["_____", "r_____"])
            .apply(candidates)
            .unwrap_err();

        assert!(matches!(err, FilterError::InvalidPattern { pattern_len: 6, .. }));
    }
}
