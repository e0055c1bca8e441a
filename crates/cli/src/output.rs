//! Formatting of the final candidate report.

use colored::Colorize;
use corpus::{Corpus, Word};
use pipeline::PipelineRun;
use serde::Serialize;
use std::io::{self, Write};

/// What gets shown once the chain has finished.
///
/// `candidates` is `None` when no filter was issued, in which case only the
/// list of executed commands is reported.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub ran: &'a [String],
    pub skipped: &'a [String],
    pub count: Option<usize>,
    pub candidates: Option<&'a [Word]>,
}

impl<'a> Report<'a> {
    pub fn new(run: &'a PipelineRun, corpus: &'a Corpus) -> Self {
        let candidates = run
            .state
            .is_filtered()
            .then(|| run.state.resolve(corpus));
        Self {
            ran: &run.executed,
            skipped: &run.skipped,
            count: candidates.map(<[Word]>::len),
            candidates,
        }
    }
}

/// Group words into rows of `per_line`, each row joined by single spaces
pub fn wrap_words(words: &[Word], per_line: usize) -> Vec<String> {
    words
        .chunks(per_line.max(1))
        .map(|row| {
            row.iter()
                .map(Word::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub fn write_text(out: &mut impl Write, report: &Report<'_>, per_line: usize) -> io::Result<()> {
    writeln!(out, "{} {}", "Ran:".bold(), report.ran.join(" "))?;
    if !report.skipped.is_empty() {
        writeln!(
            out,
            "{} {}",
            "Skipped (no candidates left):".yellow(),
            report.skipped.join(" ")
        )?;
    }

    if let Some(candidates) = report.candidates {
        writeln!(
            out,
            "{}",
            format!("Found {} candidates", candidates.len()).green().bold()
        )?;
        for line in wrap_words(candidates, per_line) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

pub fn to_json(report: &Report<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeline::CandidateState;
    use pipeline::FilterPipeline;
    use pipeline::filters::{ContainsFilter, LettersInPositionFilter, NotContainsFilter};

    fn render(run: &PipelineRun, corpus: &Corpus, per_line: usize) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_text(&mut out, &Report::new(run, corpus), per_line).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn words(count: usize) -> Vec<Word> {
        (0..count).map(|i| Word::new(format!("w{:02}", i))).collect()
    }

    #[test]
    fn test_wrap_words_rows() {
        let lines = wrap_words(&words(5), 2);
        assert_eq!(lines, vec!["w00 w01", "w02 w03", "w04"]);
    }

    #[test]
    fn test_wrap_words_default_width() {
        let lines = wrap_words(&words(27), 13);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].split(' ').count(), 13);
        assert_eq!(lines[2], "w26");
    }

    #[test]
    fn test_wrap_words_empty() {
        assert!(wrap_words(&[], 13).is_empty());
    }

    #[test]
    fn test_text_without_commands_prints_only_ran() {
        let corpus = Corpus::from_words(["crane", "trace"]);
        let run = FilterPipeline::new().apply(&corpus).unwrap();

        assert_eq!(render(&run, &corpus, 13), "Ran: \n");
    }

    #[test]
    fn test_text_lists_skipped_tail() {
        let corpus = Corpus::from_words(["crane", "trace", "plate"]);
        let run = FilterPipeline::new()
            .add_filter(ContainsFilter::new("zq"))
            .add_filter(LettersInPositionFilter::new("__"))
            .add_filter(NotContainsFilter::new("a"))
            .apply(&corpus)
            .unwrap();

        assert_eq!(
            render(&run, &corpus, 13),
            "Ran: contains\n\
             Skipped (no candidates left): letters_in_position not_contains\n\
             Found 0 candidates\n"
        );
    }

    #[test]
    fn test_text_wraps_candidates() {
        let corpus = Corpus::from_words(["crane", "trace", "grape", "plate", "slate"]);
        let run = FilterPipeline::new()
            .add_filter(ContainsFilter::new("e"))
            .apply(&corpus)
            .unwrap();

        assert_eq!(
            render(&run, &corpus, 2),
            "Ran: contains\n\
             Found 5 candidates\n\
             crane trace\n\
             grape plate\n\
             slate\n"
        );
    }

    #[test]
    fn test_report_without_filters_has_no_candidates() {
        let corpus = Corpus::from_words(["crane", "trace"]);
        let run = PipelineRun::default();

        let report = Report::new(&run, &corpus);

        assert!(report.ran.is_empty());
        assert_eq!(report.count, None);
        assert!(report.candidates.is_none());
    }

    #[test]
    fn test_json_report() {
        let corpus = Corpus::from_words(["crane", "trace"]);
        let run = PipelineRun {
            executed: vec!["not_contains".to_string()],
            skipped: vec![],
            state: CandidateState::Filtered(vec![Word::from("crane")]),
        };

        let json: serde_json::Value = serde_json::from_str(&to_json(&Report::new(&run, &corpus)).unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "ran": ["not_contains"],
                "skipped": [],
                "count": 1,
                "candidates": ["crane"],
            })
        );
    }
}
