//! Parsing of the chained filter commands.
//!
//! The trailing arguments form a chain such as
//! `contains cr not_contains p letters_not_in_position -p r____ -p __a__`.
//! The chain is cut into one segment per command name and each segment is
//! parsed on its own, so every command keeps ordinary clap flags and help.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use pipeline::filters::{
    ContainsFilter, LettersInPositionFilter, LettersNotInPositionFilter, NotContainsFilter,
};
use pipeline::{Filter, FilterPipeline};

/// Names that start a new command in the chain
pub const COMMAND_NAMES: [&str; 4] = [
    "contains",
    "not_contains",
    "letters_in_position",
    "letters_not_in_position",
];

/// One segment of the chain
#[derive(Parser, Debug)]
#[command(name = "wordle-filter", no_binary_name = true)]
struct StepArgs {
    #[command(subcommand)]
    step: Step,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Keep words containing all the given letters, in any order
    #[command(name = "contains")]
    Contains { letters: String },

    /// Keep words containing none of the given letters
    #[command(name = "not_contains")]
    NotContains { letters: String },

    /// Keep words with letters at the given positions, `_` for any letter
    #[command(name = "letters_in_position")]
    LettersInPosition { pattern: String },

    /// Drop words with a letter at a position it is known not to be in
    #[command(name = "letters_not_in_position")]
    LettersNotInPosition {
        /// Pattern of where letters are not, `_` for no constraint (repeatable)
        #[arg(short = 'p', long = "pattern")]
        patterns: Vec<String>,
    },
}

impl Step {
    pub fn into_filter(self) -> Box<dyn Filter> {
        match self {
            Step::Contains { letters } => Box::new(ContainsFilter::new(letters)),
            Step::NotContains { letters } => Box::new(NotContainsFilter::new(letters)),
            Step::LettersInPosition { pattern } => Box::new(LettersInPositionFilter::new(pattern)),
            Step::LettersNotInPosition { patterns } => {
                Box::new(LettersNotInPositionFilter::new(patterns))
            }
        }
    }
}

/// True while the segment's next token can only be an argument value:
/// a command still missing its positional, or a dangling `-p`/`--pattern`.
fn awaits_value(segment: &[&str]) -> bool {
    match segment {
        ["letters_not_in_position"] => false,
        [_command] => true,
        [.., "-p" | "--pattern"] => segment[0] == "letters_not_in_position",
        _ => false,
    }
}

/// Split the raw chain into steps, in the order given.
///
/// A command name starts a new step unless the current step is still
/// waiting for its value, so `contains contains` filters on those letters.
pub fn parse_chain(args: &[String]) -> Result<Vec<Step>, clap::Error> {
    let mut segments: Vec<Vec<&str>> = Vec::new();

    for arg in args {
        let is_value = segments.last().is_some_and(|segment| awaits_value(segment));
        if COMMAND_NAMES.contains(&arg.as_str()) && !is_value {
            segments.push(vec![arg.as_str()]);
        } else if let Some(segment) = segments.last_mut() {
            segment.push(arg.as_str());
        } else {
            return Err(StepArgs::command().error(
                ErrorKind::InvalidSubcommand,
                format!(
                    "'{}' is not a command; expected one of: {}",
                    arg,
                    COMMAND_NAMES.join(", ")
                ),
            ));
        }
    }

    segments
        .into_iter()
        .map(|segment| StepArgs::try_parse_from(segment).map(|args| args.step))
        .collect()
}

pub fn build_pipeline(steps: Vec<Step>) -> FilterPipeline {
    let mut pipeline = FilterPipeline::new();
    for step in steps {
        pipeline.push(step.into_filter());
    }
    pipeline
}
