//! Parser for newline-delimited word lists.
//!
//! Format: one word per line, UTF-8, no header. Surrounding whitespace is
//! stripped and lines that are blank after stripping are skipped. Words are
//! kept in file order with no deduplication or case folding.

use crate::error::{CorpusError, Result};
use crate::types::{Corpus, Word};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse words from any buffered reader
pub fn parse_lines(reader: impl BufRead) -> Result<Vec<Word>> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        words.push(Word::from(trimmed));
    }

    Ok(words)
}

/// Load a word list from disk.
///
/// Both open and read failures surface as [`CorpusError::SourceUnavailable`]
/// carrying the offending path.
pub fn load_from_file(path: &Path) -> Result<Corpus> {
    let unavailable = |source| CorpusError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    let words = parse_lines(BufReader::new(file)).map_err(|err| match err {
        CorpusError::Io(source) => unavailable(source),
        other => other,
    })?;

    let corpus = Corpus::new(words);
    tracing::info!("Loaded {} words from {}", corpus.len(), path.display());

    let lengths = corpus.word_lengths();
    if lengths.len() > 1 {
        tracing::warn!(
            "Word list {} mixes word lengths {:?}; position patterns only fit one of them",
            path.display(),
            lengths
        );
    }

    Ok(corpus)
}

impl Corpus {
    /// See [`load_from_file`].
    pub fn load_from_file(path: &Path) -> Result<Self> {
        load_from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_parse_lines_trims_and_skips_blanks() {
        let input = "crane\n\n  trace  \n\t\ngrape\r\nplate";
        let words = parse_lines(Cursor::new(input)).unwrap();

        assert_eq!(words, vec!["crane", "trace", "grape", "plate"]);
    }

    #[test]
    fn test_parse_lines_keeps_duplicates_and_case() {
        let words = parse_lines(Cursor::new("Crane\ncrane\ncrane\n")).unwrap();
        assert_eq!(words, vec!["Crane", "crane", "crane"]);
    }

    #[test]
    fn test_parse_lines_empty_input() {
        let words = parse_lines(Cursor::new("\n \n")).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "plate").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "crane").unwrap();

        let corpus = Corpus::load_from_file(file.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.words()[0], "plate");
        assert_eq!(corpus.words()[1], "crane");
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        match load_from_file(&path) {
            Err(CorpusError::SourceUnavailable { path: reported, .. }) => {
                assert_eq!(reported, path);
            }
            other => panic!("expected SourceUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_source_unavailable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x63, 0xff, 0xfe, b'\n']).unwrap();

        let result = load_from_file(file.path());
        assert!(matches!(result, Err(CorpusError::SourceUnavailable { .. })));
    }
}
