mod commands;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use corpus::Corpus;
use output::Report;
use std::num::NonZeroUsize;
use std::path::PathBuf;

const CHAIN_HELP: &str = "\
Commands (chain any number, applied left to right):
  contains <LETTERS>                       words containing all the letters
  not_contains <LETTERS>                   words containing none of the letters
  letters_in_position <PATTERN>            letters fixed in place, _ for any
  letters_not_in_position [-p <PATTERN>]...  letters present but not at these places

Example:
  wordle-filter contains ae not_contains slt letters_in_position ____e \\
      letters_not_in_position -p __a__ -p _r___";

/// wordle-filter - narrow a word list with Wordle clues
#[derive(Parser)]
#[command(name = "wordle-filter")]
#[command(about = "Chain filters to narrow a list of candidate Wordle answers", long_about = None)]
#[command(after_help = CHAIN_HELP)]
struct Cli {
    /// Path to the word list, one word per line
    #[arg(short, long, env = "WORDLE_WORD_LIST", default_value = "five_letter_words.txt")]
    file: PathBuf,

    /// Number of words printed per output line
    #[arg(short = 'w', long, default_value = "13")]
    per_line: NonZeroUsize,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Filter commands to run, in order
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    chain: Vec<String>,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let steps = commands::parse_chain(&cli.chain).unwrap_or_else(|err| err.exit());

    let corpus = Corpus::load_from_file(&cli.file)
        .with_context(|| format!("Failed to load word list from {}", cli.file.display()))?;

    let pipeline = commands::build_pipeline(steps);
    tracing::debug!("Running {} filter(s): {:?}", pipeline.len(), pipeline.names());
    let run = pipeline.apply(&corpus).context("Filter chain aborted")?;

    let report = Report::new(&run, &corpus);
    if cli.json {
        println!("{}", output::to_json(&report)?);
    } else {
        output::write_text(&mut std::io::stdout().lock(), &report, cli.per_line.get())?;
    }

    Ok(())
}
