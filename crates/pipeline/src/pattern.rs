//! Position patterns such as `_r__e`.
//!
//! Each character of a pattern either pins a letter to that position or is
//! the wildcard `_`, which leaves the position unconstrained.

use crate::error::{FilterError, Result};
use corpus::Word;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Marks a position with no constraint
pub const WILDCARD: char = '_';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    slots: Vec<Option<char>>,
}

impl Pattern {
    pub fn parse(text: &str) -> Self {
        let slots = text
            .chars()
            .map(|c| if c == WILDCARD { None } else { Some(c) })
            .collect();
        Self {
            raw: text.to_string(),
            slots,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Number of positions (characters) in the pattern
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    pub fn fits(&self, word: &Word) -> bool {
        self.len() == word.len()
    }

    /// Err unless every word has exactly as many letters as the pattern
    pub fn check_fits(&self, words: &[Word]) -> Result<()> {
        match words.iter().find(|word| !self.fits(word)) {
            Some(word) => Err(FilterError::InvalidPattern {
                pattern: self.raw.clone(),
                pattern_len: self.len(),
                word: word.to_string(),
                word_len: word.len(),
            }),
            None => Ok(()),
        }
    }

    /// Every pinned letter is found at its position in `word`.
    ///
    /// Callers must check `fits(word)` first.
    pub fn matches(&self, word: &Word) -> bool {
        debug_assert!(self.fits(word), "pattern '{}' does not fit '{}'", self, word);
        self.slots
            .iter()
            .zip(word.chars())
            .all(|(slot, letter)| slot.is_none_or(|pinned| pinned == letter))
    }

    /// No pinned letter is found at its position in `word`.
    ///
    /// Callers must check `fits(word)` first.
    pub fn misses(&self, word: &Word) -> bool {
        debug_assert!(self.fits(word), "pattern '{}' does not fit '{}'", self, word);
        self.slots
            .iter()
            .zip(word.chars())
            .all(|(slot, letter)| slot.is_none_or(|pinned| pinned != letter))
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for Pattern {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
