use corpus::Corpus;
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("five_letter_words.txt"));

    println!("Loading word list from {}...\n", path.display());

    let start = Instant::now();
    let corpus = Corpus::load_from_file(&path).expect("Failed to load word list");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Words: {}", corpus.len());
    println!("Word lengths: {:?}", corpus.word_lengths());
}
