//! Filter implementations for the word pipeline.
//!
//! Each filter corresponds to one chainable command and can be composed into
//! a FilterPipeline. The free functions run the same predicates over a
//! borrowed slice.

pub mod contains;
pub mod not_contains;
pub mod letters_in_position;
pub mod letters_not_in_position;

// Re-export for convenience
pub use contains::{ContainsFilter, contains};
pub use not_contains::{NotContainsFilter, not_contains};
pub use letters_in_position::{LettersInPositionFilter, letters_in_position};
pub use letters_not_in_position::{LettersNotInPositionFilter, letters_not_in_position};
