//! Pipeline for narrowing a word list with chained filters.
//!
//! This crate provides:
//! - Filter trait and the four word filters
//! - Pattern parsing for position-based filters
//! - FilterPipeline for composing filters
//!
//! ## Architecture
//! Every filter takes the current candidate set by value and returns a new,
//! possibly smaller one with the survivors in their original order. The
//! pipeline starts from the full corpus and hands each step the output of
//! the previous one. Once nothing is left the remaining steps are skipped.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::FilterPipeline;
//! use pipeline::filters::*;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(ContainsFilter::new("cr"))
//!     .add_filter(NotContainsFilter::new("p"))
//!     .add_filter(LettersInPositionFilter::new("_r___"))
//!     .add_filter(LettersNotInPositionFilter::new(["__a__", "e____"]));
//!
//! let run = pipeline.apply(&corpus)?;
//! println!("{} candidates", run.state.resolve(&corpus).len());
//! ```

pub mod error;
pub mod pattern;
pub mod scan;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use error::{FilterError, Result};
pub use pattern::{Pattern, WILDCARD};
pub use traits::Filter;
pub use filter_pipeline::{CandidateState, FilterPipeline, PipelineRun};
