//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that lets the four word filters be
//! chained in any order by a FilterPipeline.

use crate::error::Result;
use corpus::Word;

/// Core trait for narrowing a candidate set.
///
/// ## Design Note
/// - `Send + Sync` lets filters be shared with the Rayon pool during scans
/// - Filters take ownership of the Vec<Word> and return a new, filtered Vec
/// - Surviving words keep their relative input order
pub trait Filter: Send + Sync {
    /// Command name of this filter (for logging and the run summary)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Returns
    /// * `Ok(Vec<Word>)` - The words that satisfy the filter's predicate
    /// * `Err` - If the filter's argument cannot be applied to these words
    fn apply(&self, candidates: Vec<Word>) -> Result<Vec<Word>>;
}
