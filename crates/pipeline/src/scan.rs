//! Order-preserving scans over a candidate set.
//!
//! Small sets are scanned on the current thread; large ones are split
//! across the Rayon pool. Rayon's indexed collect keeps input order, so
//! both paths return identical output.

use corpus::Word;
use rayon::prelude::*;

/// Sets at least this large are scanned in parallel
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Keep the words for which `keep` returns true, in input order
pub fn retain_words<F>(candidates: Vec<Word>, keep: F) -> Vec<Word>
where
    F: Fn(&Word) -> bool + Sync + Send,
{
    if candidates.len() >= PARALLEL_THRESHOLD {
        candidates.into_par_iter().filter(|word| keep(word)).collect()
    } else {
        candidates.into_iter().filter(|word| keep(word)).collect()
    }
}
