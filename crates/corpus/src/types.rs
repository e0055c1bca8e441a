//! Core domain types for word lists.
//!
//! A `Word` is an immutable run of letters; a `Corpus` is the ordered,
//! never-mutated list every filter chain starts from.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// A single dictionary word.
///
/// Positions are counted in characters, not bytes, so `len` and
/// `chars` agree with each other for any input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the word
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }

    /// True if `letter` appears anywhere in the word
    pub fn contains_char(&self, letter: char) -> bool {
        self.0.contains(letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Word {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The full word list, in source order.
///
/// Built once at startup and only ever read afterwards. Filters work on
/// owned copies obtained through [`Corpus::candidates`].
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    words: Vec<Word>,
}

impl Corpus {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Build a corpus from raw entries, trimming each one and skipping
    /// entries that are blank after trimming (same rule as file loading).
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .filter_map(|entry| {
                let trimmed = entry.as_ref().trim();
                (!trimmed.is_empty()).then(|| Word::from(trimmed))
            })
            .collect();
        Self { words }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Fresh owned copy of every word, the starting point of a filter chain
    pub fn candidates(&self) -> Vec<Word> {
        self.words.clone()
    }

    /// Distinct word lengths present in the corpus, ascending
    pub fn word_lengths(&self) -> Vec<usize> {
        self.words
            .iter()
            .map(Word::len)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
