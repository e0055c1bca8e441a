//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! filters together using the builder pattern, plus the state it threads
//! between steps.

use crate::error::Result;
use crate::traits::Filter;
use corpus::{Corpus, Word};

/// Which candidates are current between pipeline steps.
///
/// Before any filter runs the whole corpus is the candidate set; it is
/// only copied once the first step actually needs an owned set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CandidateState {
    #[default]
    NotYetFiltered,
    Filtered(Vec<Word>),
}

impl CandidateState {
    /// The current candidates, falling back to the full corpus
    pub fn resolve<'a>(&'a self, corpus: &'a Corpus) -> &'a [Word] {
        match self {
            CandidateState::NotYetFiltered => corpus.words(),
            CandidateState::Filtered(words) => words,
        }
    }

    pub fn is_filtered(&self) -> bool {
        matches!(self, CandidateState::Filtered(_))
    }

    pub fn into_candidates(self, corpus: &Corpus) -> Vec<Word> {
        match self {
            CandidateState::NotYetFiltered => corpus.candidates(),
            CandidateState::Filtered(words) => words,
        }
    }
}

/// Outcome of running a pipeline against a corpus.
#[derive(Debug, Clone, Default)]
pub struct PipelineRun {
    /// Names of the filters that ran, in order
    pub executed: Vec<String>,
    /// Names of the filters short-circuited because no candidates were left
    pub skipped: Vec<String>,
    pub state: CandidateState,
}

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ContainsFilter::new("cr"))
///     .add_filter(NotContainsFilter::new("p"))
///     .add_filter(LettersInPositionFilter::new("_r___"));
///
/// let run = pipeline.apply(&corpus)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Append an already boxed filter.
    pub fn push(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Filter names in the order they will run
    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Run every filter against the corpus, starting from the full word list.
    ///
    /// ## Algorithm
    /// 1. Start in `NotYetFiltered` (the corpus itself is current)
    /// 2. For each filter in order:
    ///    a. If the current set is empty, record the step as skipped
    ///    b. Otherwise hand the filter an owned copy and take its output as current
    /// 3. Return the run summary with the final state
    ///
    /// # Returns
    /// * `Ok(PipelineRun)` - Executed and skipped steps plus the final candidates
    /// * `Err` - The first filter error; later filters do not run
    pub fn apply(&self, corpus: &Corpus) -> Result<PipelineRun> {
        let mut run = PipelineRun::default();

        for filter in &self.filters {
            let current = run.state.resolve(corpus);
            if current.is_empty() {
                tracing::debug!("Skipping filter: {} (no candidates left)", filter.name());
                run.skipped.push(filter.name().to_string());
                run.state = CandidateState::Filtered(Vec::new());
                continue;
            }

            let input = std::mem::take(&mut run.state).into_candidates(corpus);
            run.state = CandidateState::Filtered(self.apply_step(filter.as_ref(), input)?);
            run.executed.push(filter.name().to_string());
        }

        Ok(run)
    }

    /// Apply all filters in sequence to a bare candidate set.
    pub fn apply_to(&self, candidates: Vec<Word>) -> Result<Vec<Word>> {
        let mut current = candidates;
        for filter in &self.filters {
            if current.is_empty() {
                tracing::debug!("Skipping filter: {} (no candidates left)", filter.name());
                continue;
            }
            current = self.apply_step(filter.as_ref(), current)?;
        }
        Ok(current)
    }

    fn apply_step(&self, filter: &dyn Filter, input: Vec<Word>) -> Result<Vec<Word>> {
        tracing::debug!(
            "Applying filter: {} (input count: {})",
            filter.name(),
            input.len()
        );
        let output = filter.apply(input)?;
        tracing::debug!(
            "Filter applied: {} (output count: {})",
            filter.name(),
            output.len()
        );
        Ok(output)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
